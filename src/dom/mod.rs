// src/dom/mod.rs  -  In-memory page document + render target
use std::collections::{BTreeMap, BTreeSet};

/// Attribute carrying a node's localization key
pub const I18N_ATTR: &str = "data-i18n";

/// Index into the document arena
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Html, Nav, Section, Div, Span, H1, H2, H3, P,
    A, Button, Select, Option, Input, Textarea, Img, Footer,
}

impl Tag {
    /// Text-input-like controls receive localized text as a placeholder
    pub fn is_text_input(self) -> bool {
        matches!(self, Tag::Input | Tag::Textarea)
    }
}

/// Vertical layout box in CSS pixels, relative to the top of the page
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutBox {
    pub top:    f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(top: f64, height: f64) -> Self { Self { top, height } }
    pub fn bottom(&self) -> f64 { self.top + self.height }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag:         Tag,
    pub id:          Option<String>,
    pub classes:     BTreeSet<String>,
    pub attrs:       BTreeMap<String, String>,
    pub text:        String,
    pub placeholder: String,
    /// Inline style properties (`transform`, `opacity`, `width` ...)
    pub style:       BTreeMap<String, String>,
    pub children:    Vec<NodeId>,
    pub parent:      Option<NodeId>,
    pub layout:      LayoutBox,
}

impl Element {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            id:          None,
            classes:     BTreeSet::new(),
            attrs:       BTreeMap::new(),
            text:        String::new(),
            placeholder: String::new(),
            style:       BTreeMap::new(),
            children:    Vec::new(),
            parent:      None,
            layout:      LayoutBox::default(),
        }
    }
}

/// Arena-backed document. Node 0 is the `<html>` root; only nodes reachable
/// from it are matched by queries.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self { Self::new() }
}

impl Document {
    pub fn new() -> Self {
        Self { nodes: vec![Element::new(Tag::Html)] }
    }

    pub fn root(&self) -> NodeId { 0 }

    /// Create a detached node
    pub fn create(&mut self, tag: Tag) -> NodeId {
        self.nodes.push(Element::new(tag));
        self.nodes.len() - 1
    }

    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Create a node and append it under `parent` in one step
    pub fn add(&mut self, parent: NodeId, tag: Tag) -> NodeId {
        let n = self.create(tag);
        self.append(parent, n);
        n
    }

    pub fn get(&self, node: NodeId) -> &Element { &self.nodes[node] }
    pub fn get_mut(&mut self, node: NodeId) -> &mut Element { &mut self.nodes[node] }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// All attached nodes in document order (pre-order, root first)
    pub fn walk(&self) -> Vec<NodeId> {
        self.descendants(self.root(), true)
    }

    pub fn descendants(&self, node: NodeId, include_self: bool) -> Vec<NodeId> {
        let mut out   = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            if n != node || include_self { out.push(n); }
            stack.extend(self.nodes[n].children.iter().rev().copied());
        }
        out
    }

    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|&n| self.nodes[n].id.as_deref() == Some(id))
    }

    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.walk().into_iter().filter(|&n| self.has_class(n, class)).collect()
    }

    pub fn query_attr(&self, name: &str) -> Vec<NodeId> {
        self.walk().into_iter().filter(|&n| self.nodes[n].attrs.contains_key(name)).collect()
    }

    pub fn query_attr_eq(&self, name: &str, value: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|&n| self.attr(n, name) == Some(value))
    }

    /// Descendant of `node` carrying localization key `key`
    pub fn node_for_key_in(&self, node: NodeId, key: &str) -> Option<NodeId> {
        self.descendants(node, false)
            .into_iter()
            .find(|&n| self.attr(n, I18N_ATTR) == Some(key))
    }

    /// `a[href^="#"]`
    pub fn fragment_links(&self) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&n| self.nodes[n].tag == Tag::A
                && self.attr(n, "href").is_some_and(|h| h.starts_with('#')))
            .collect()
    }

    pub fn descendants_with_tag(&self, node: NodeId, tag: Tag) -> Vec<NodeId> {
        self.descendants(node, false)
            .into_iter()
            .filter(|&n| self.nodes[n].tag == tag)
            .collect()
    }

    /// Lowest bottom edge of any attached node
    pub fn content_height(&self) -> f64 {
        self.walk()
            .into_iter()
            .map(|n| self.nodes[n].layout.bottom())
            .fold(0.0, f64::max)
    }

    // ── Classes ───────────────────────────────────────────────────────────────

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node].classes.contains(class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node].classes.remove(class);
    }

    /// `classList.toggle(class, force)`; returns whether the class is now present
    pub fn toggle_class(&mut self, node: NodeId, class: &str, force: Option<bool>) -> bool {
        let on = force.unwrap_or(!self.has_class(node, class));
        if on { self.add_class(node, class); } else { self.remove_class(node, class); }
        on
    }

    // ── Attributes, text, style ───────────────────────────────────────────────

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node].attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        self.nodes[node].attrs.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        self.nodes[node].attrs.remove(name);
    }

    pub fn text(&self, node: NodeId) -> &str { &self.nodes[node].text }

    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.nodes[node].text = text.to_string();
    }

    pub fn style(&self, node: NodeId, prop: &str) -> Option<&str> {
        self.nodes[node].style.get(prop).map(String::as_str)
    }

    /// Assigning an empty string clears the property, as with inline CSS
    pub fn set_style(&mut self, node: NodeId, prop: &str, value: &str) {
        let style = &mut self.nodes[node].style;
        if value.is_empty() {
            style.remove(prop);
        } else {
            style.insert(prop.to_string(), value.to_string());
        }
    }

    pub fn set_layout(&mut self, node: NodeId, layout: LayoutBox) {
        self.nodes[node].layout = layout;
    }

    pub fn layout(&self, node: NodeId) -> LayoutBox { self.nodes[node].layout }
}

// ── Render target ─────────────────────────────────────────────────────────────

/// A node that carries a localization key
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedNode {
    pub node:       NodeId,
    pub key:        String,
    pub text_input: bool,
}

/// Minimal surface the localizer renders into
pub trait RenderTarget {
    fn set_root_attribute(&mut self, name: &str, value: &str);
    fn localized_nodes(&self) -> Vec<LocalizedNode>;
    /// First node whose localization key equals `key`
    fn node_for_key(&self, key: &str) -> Option<NodeId>;
    fn set_text(&mut self, node: NodeId, text: &str);
    fn set_placeholder(&mut self, node: NodeId, text: &str);
}

impl RenderTarget for Document {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        let root = self.root();
        self.set_attr(root, name, value);
    }

    fn localized_nodes(&self) -> Vec<LocalizedNode> {
        self.query_attr(I18N_ATTR)
            .into_iter()
            .map(|n| LocalizedNode {
                node:       n,
                key:        self.nodes[n].attrs[I18N_ATTR].clone(),
                text_input: self.nodes[n].tag.is_text_input(),
            })
            .collect()
    }

    fn node_for_key(&self, key: &str) -> Option<NodeId> {
        self.query_attr_eq(I18N_ATTR, key)
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.set_text_content(node, text);
    }

    fn set_placeholder(&mut self, node: NodeId, text: &str) {
        self.nodes[node].placeholder = text.to_string();
    }
}
