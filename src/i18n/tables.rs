// src/i18n/tables.rs  -  Built-in landing page strings
use super::{lang_table, LangTable};

pub static BUILTIN: &[&LangTable] = &[&EN, &HI, &TA, &BN, &UR];

// ── English ───────────────────────────────────────────────────────────────────
lang_table!(EN, "en", [
    "nav_features"           => "Features",
    "nav_stats"              => "Numbers",
    "nav_languages"          => "Languages",
    "nav_screenshots"        => "Screenshots",
    "nav_download"           => "Download",
    "hero_badge"             => "Free & offline-first",
    "hero_tagline"           => "Track every bill, never miss a due date",
    "hero_tagline_before"    => "Track every bill,",
    "hero_tagline_highlight" => "never miss a due date",
    "hero_subtitle"          => "MyBills keeps your electricity, phone, rent and card bills in one place and reminds you before they are due.",
    "hero_cta_download"      => "Download now",
    "hero_cta_learn"         => "See how it works",
    "stats_users"            => "Happy users",
    "stats_bills"            => "Bills tracked",
    "stats_languages"        => "Languages",
    "features_title"         => "Everything your bills need",
    "feature_scan_title"     => "Scan & save",
    "feature_scan_desc"      => "Photograph a paper bill and the amount and due date are filled in for you.",
    "feature_remind_title"   => "Smart reminders",
    "feature_remind_desc"    => "Get a nudge three days before a payment is due, and again on the day.",
    "feature_split_title"    => "Split with family",
    "feature_split_desc"     => "Share a household bill and see who has paid their part.",
    "languages_title"        => "Speaks your language",
    "languages_subtitle"     => "Switch between 23 Indian languages at any time.",
    "screenshots_title"      => "See it in action",
    "screenshots_subtitle"   => "Desktop and phone, always in sync.",
    "download_title"         => "Get MyBills",
    "download_subtitle"      => "Available for Windows and Android.",
    "download_windows"       => "Download for Windows",
    "download_android"       => "Get it on Android",
    "newsletter_placeholder" => "Your email address",
    "newsletter_button"      => "Notify me",
    "modal_title"            => "Windows protected your PC",
    "modal_body"             => "Click \"More info\" and then \"Run anyway\" to finish installing MyBills.",
    "modal_close"            => "Got it",
    "footer_rights"          => "© MyBills. All rights reserved.",
]);

// ── Hindi ─────────────────────────────────────────────────────────────────────
lang_table!(HI, "hi", [
    "nav_features"           => "विशेषताएँ",
    "nav_stats"              => "आँकड़े",
    "nav_languages"          => "भाषाएँ",
    "nav_screenshots"        => "स्क्रीनशॉट",
    "nav_download"           => "डाउनलोड",
    "hero_badge"             => "मुफ़्त और ऑफ़लाइन",
    "hero_tagline"           => "हर बिल पर नज़र रखें, कोई तारीख न चूकें",
    "hero_tagline_before"    => "हर बिल पर नज़र रखें,",
    "hero_tagline_highlight" => "कोई तारीख न चूकें",
    "hero_subtitle"          => "MyBills बिजली, फ़ोन, किराया और कार्ड के बिल एक जगह रखता है और देय तिथि से पहले याद दिलाता है।",
    "hero_cta_download"      => "अभी डाउनलोड करें",
    "hero_cta_learn"         => "देखें कैसे काम करता है",
    "stats_users"            => "खुश उपयोगकर्ता",
    "stats_bills"            => "बिल ट्रैक किए गए",
    "stats_languages"        => "भाषाएँ",
    "features_title"         => "आपके बिलों के लिए सब कुछ",
    "feature_scan_title"     => "स्कैन करें और सहेजें",
    "feature_scan_desc"      => "काग़ज़ी बिल की फ़ोटो लें, राशि और तारीख अपने आप भर जाएगी।",
    "feature_remind_title"   => "स्मार्ट रिमाइंडर",
    "feature_remind_desc"    => "भुगतान से तीन दिन पहले और उसी दिन सूचना पाएँ।",
    "feature_split_title"    => "परिवार के साथ बाँटें",
    "feature_split_desc"     => "घर का बिल साझा करें और देखें किसने अपना हिस्सा चुकाया।",
    "languages_title"        => "आपकी भाषा में",
    "languages_subtitle"     => "कभी भी 23 भारतीय भाषाओं में बदलें।",
    "screenshots_title"      => "काम करते हुए देखें",
    "screenshots_subtitle"   => "डेस्कटॉप और फ़ोन, हमेशा साथ-साथ।",
    "download_title"         => "MyBills पाएँ",
    "download_subtitle"      => "Windows और Android के लिए उपलब्ध।",
    "download_windows"       => "Windows के लिए डाउनलोड करें",
    "download_android"       => "Android पर पाएँ",
    "newsletter_placeholder" => "आपका ईमेल पता",
    "newsletter_button"      => "मुझे सूचित करें",
    "modal_title"            => "Windows ने आपके पीसी की रक्षा की",
    "modal_body"             => "इंस्टॉल पूरा करने के लिए \"More info\" और फिर \"Run anyway\" पर क्लिक करें।",
    "modal_close"            => "समझ गया",
    "footer_rights"          => "© MyBills. सर्वाधिकार सुरक्षित।",
]);

// ── Tamil (tagline split from hero_tagline) ──────────────────────────────────
lang_table!(TA, "ta", [
    "nav_features"           => "அம்சங்கள்",
    "nav_stats"              => "எண்ணிக்கைகள்",
    "nav_languages"          => "மொழிகள்",
    "nav_screenshots"        => "திரைப்படங்கள்",
    "nav_download"           => "பதிவிறக்கம்",
    "hero_badge"             => "இலவசம், இணையம் தேவையில்லை",
    "hero_tagline"           => "ஒவ்வொரு பில்லையும் கண்காணியுங்கள், கடைசி தேதியை தவறவிடாதீர்கள்",
    "hero_subtitle"          => "மின்சாரம், தொலைபேசி, வாடகை, கார்டு பில்கள் அனைத்தும் ஒரே இடத்தில், நினைவூட்டலுடன்.",
    "hero_cta_download"      => "இப்போது பதிவிறக்கவும்",
    "hero_cta_learn"         => "எப்படி வேலை செய்கிறது",
    "stats_users"            => "மகிழ்ச்சியான பயனர்கள்",
    "stats_bills"            => "கண்காணிக்கப்பட்ட பில்கள்",
    "stats_languages"        => "மொழிகள்",
    "features_title"         => "உங்கள் பில்களுக்கு தேவையானது அனைத்தும்",
    "feature_scan_title"     => "ஸ்கேன் செய்து சேமிக்கவும்",
    "feature_scan_desc"      => "காகித பில்லை படம் எடுத்தால் தொகையும் தேதியும் தானாக நிரப்பப்படும்.",
    "feature_remind_title"   => "நினைவூட்டல்கள்",
    "feature_remind_desc"    => "செலுத்த வேண்டிய நாளுக்கு மூன்று நாள் முன்பும் அன்றும் அறிவிப்பு.",
    "feature_split_title"    => "குடும்பத்துடன் பகிரவும்",
    "feature_split_desc"     => "வீட்டு பில்லை பகிர்ந்து யார் செலுத்தினார்கள் என்று பாருங்கள்.",
    "languages_title"        => "உங்கள் மொழியில்",
    "languages_subtitle"     => "23 இந்திய மொழிகளில் எப்போது வேண்டுமானாலும் மாற்றலாம்.",
    "screenshots_title"      => "செயல்பாட்டில் பாருங்கள்",
    "screenshots_subtitle"   => "கணினியும் தொலைபேசியும் எப்போதும் ஒத்திசைவில்.",
    "download_title"         => "MyBills பெறுங்கள்",
    "download_subtitle"      => "Windows மற்றும் Android-க்கு கிடைக்கிறது.",
    "download_windows"       => "Windows-க்கு பதிவிறக்கவும்",
    "download_android"       => "Android-ல் பெறுங்கள்",
    "newsletter_placeholder" => "உங்கள் மின்னஞ்சல்",
    "newsletter_button"      => "எனக்கு தெரிவிக்கவும்",
    "modal_title"            => "Windows உங்கள் கணினியை பாதுகாத்தது",
    "modal_body"             => "\"More info\" பின்னர் \"Run anyway\" என்பதை அழுத்தவும்.",
    "modal_close"            => "சரி",
    "footer_rights"          => "© MyBills. அனைத்து உரிமைகளும் பாதுகாக்கப்பட்டவை.",
]);

// ── Bengali (tagline split from hero_tagline) ────────────────────────────────
lang_table!(BN, "bn", [
    "nav_features"           => "বৈশিষ্ট্য",
    "nav_stats"              => "সংখ্যা",
    "nav_languages"          => "ভাষা",
    "nav_screenshots"        => "স্ক্রিনশট",
    "nav_download"           => "ডাউনলোড",
    "hero_badge"             => "বিনামূল্যে ও অফলাইন",
    "hero_tagline"           => "প্রতিটি বিলের হিসাব রাখুন, কোনো তারিখ ভুলবেন না",
    "hero_subtitle"          => "বিদ্যুৎ, ফোন, ভাড়া ও কার্ডের বিল এক জায়গায়, সময়ের আগেই মনে করিয়ে দেয়।",
    "hero_cta_download"      => "এখনই ডাউনলোড করুন",
    "hero_cta_learn"         => "কীভাবে কাজ করে দেখুন",
    "stats_users"            => "সন্তুষ্ট ব্যবহারকারী",
    "stats_bills"            => "বিল ট্র্যাক হয়েছে",
    "stats_languages"        => "ভাষা",
    "features_title"         => "আপনার বিলের জন্য সবকিছু",
    "feature_scan_title"     => "স্ক্যান করে সংরক্ষণ",
    "feature_scan_desc"      => "কাগজের বিলের ছবি তুলুন, টাকা ও তারিখ নিজে থেকেই বসে যাবে।",
    "feature_remind_title"   => "স্মার্ট রিমাইন্ডার",
    "feature_remind_desc"    => "পেমেন্টের তিন দিন আগে এবং সেদিন আবার মনে করিয়ে দেওয়া হবে।",
    "feature_split_title"    => "পরিবারের সাথে ভাগ করুন",
    "feature_split_desc"     => "সংসারের বিল ভাগ করুন এবং দেখুন কে তার অংশ দিয়েছে।",
    "languages_title"        => "আপনার ভাষায়",
    "languages_subtitle"     => "যেকোনো সময় ২৩টি ভারতীয় ভাষায় বদলান।",
    "screenshots_title"      => "কাজে দেখুন",
    "screenshots_subtitle"   => "ডেস্কটপ ও ফোন, সবসময় একসাথে।",
    "download_title"         => "MyBills নিন",
    "download_subtitle"      => "Windows ও Android-এর জন্য উপলব্ধ।",
    "download_windows"       => "Windows-এর জন্য ডাউনলোড",
    "download_android"       => "Android-এ নিন",
    "newsletter_placeholder" => "আপনার ইমেল ঠিকানা",
    "newsletter_button"      => "আমাকে জানান",
    "modal_title"            => "Windows আপনার পিসি সুরক্ষিত রেখেছে",
    "modal_body"             => "ইনস্টল শেষ করতে \"More info\" তারপর \"Run anyway\" চাপুন।",
    "modal_close"            => "বুঝেছি",
    "footer_rights"          => "© MyBills. সর্বস্বত্ব সংরক্ষিত।",
]);

// ── Urdu (right-to-left) ──────────────────────────────────────────────────────
lang_table!(UR, "ur", [
    "nav_features"           => "خصوصیات",
    "nav_stats"              => "اعداد",
    "nav_languages"          => "زبانیں",
    "nav_screenshots"        => "اسکرین شاٹس",
    "nav_download"           => "ڈاؤن لوڈ",
    "hero_badge"             => "مفت اور آف لائن",
    "hero_tagline"           => "ہر بل پر نظر رکھیں، کوئی تاریخ نہ چھوٹے",
    "hero_tagline_before"    => "ہر بل پر نظر رکھیں،",
    "hero_tagline_highlight" => "کوئی تاریخ نہ چھوٹے",
    "hero_subtitle"          => "MyBills بجلی، فون، کرایہ اور کارڈ کے بل ایک جگہ رکھتا ہے اور مقررہ تاریخ سے پہلے یاد دلاتا ہے۔",
    "hero_cta_download"      => "ابھی ڈاؤن لوڈ کریں",
    "hero_cta_learn"         => "دیکھیں یہ کیسے کام کرتا ہے",
    "stats_users"            => "مطمئن صارفین",
    "stats_bills"            => "ٹریک شدہ بل",
    "stats_languages"        => "زبانیں",
    "features_title"         => "آپ کے بلوں کے لیے سب کچھ",
    "feature_scan_title"     => "اسکین کریں اور محفوظ کریں",
    "feature_scan_desc"      => "کاغذی بل کی تصویر لیں، رقم اور تاریخ خود بخود بھر جائے گی۔",
    "feature_remind_title"   => "اسمارٹ یاد دہانی",
    "feature_remind_desc"    => "ادائیگی سے تین دن پہلے اور اسی دن اطلاع پائیں۔",
    "feature_split_title"    => "خاندان کے ساتھ بانٹیں",
    "feature_split_desc"     => "گھر کا بل بانٹیں اور دیکھیں کس نے اپنا حصہ ادا کیا۔",
    "languages_title"        => "آپ کی زبان میں",
    "languages_subtitle"     => "کسی بھی وقت 23 ہندوستانی زبانوں میں بدلیں۔",
    "screenshots_title"      => "عمل میں دیکھیں",
    "screenshots_subtitle"   => "ڈیسک ٹاپ اور فون، ہمیشہ ساتھ ساتھ۔",
    "download_title"         => "MyBills حاصل کریں",
    "download_subtitle"      => "Windows اور Android کے لیے دستیاب۔",
    "download_windows"       => "Windows کے لیے ڈاؤن لوڈ کریں",
    "download_android"       => "Android پر حاصل کریں",
    "newsletter_placeholder" => "آپ کا ای میل پتہ",
    "newsletter_button"      => "مجھے مطلع کریں",
    "modal_title"            => "Windows نے آپ کے پی سی کی حفاظت کی",
    "modal_body"             => "انسٹال مکمل کرنے کے لیے \"More info\" اور پھر \"Run anyway\" پر کلک کریں۔",
    "modal_close"            => "سمجھ گیا",
    "footer_rights"          => "© MyBills. جملہ حقوق محفوظ ہیں۔",
]);
