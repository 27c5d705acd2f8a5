//! Static ISO 639 language data
//!
//! One row per ISO 639-1 language: two-letter code, three-letter code
//! (terminology form, which is what `langs` style lookups and most taggers
//! emit) and the English name metadata providers report.

use std::collections::HashMap;
use std::sync::OnceLock;

/// `(iso 639-1, iso 639-2/T, english name)`
pub(crate) const LANGUAGES: &[(&str, &str, &str)] = &[
    ("aa", "aar", "Afar"),
    ("ab", "abk", "Abkhazian"),
    ("ae", "ave", "Avestan"),
    ("af", "afr", "Afrikaans"),
    ("ak", "aka", "Akan"),
    ("am", "amh", "Amharic"),
    ("an", "arg", "Aragonese"),
    ("ar", "ara", "Arabic"),
    ("as", "asm", "Assamese"),
    ("av", "ava", "Avaric"),
    ("ay", "aym", "Aymara"),
    ("az", "aze", "Azerbaijani"),
    ("ba", "bak", "Bashkir"),
    ("be", "bel", "Belarusian"),
    ("bg", "bul", "Bulgarian"),
    ("bh", "bih", "Bihari"),
    ("bi", "bis", "Bislama"),
    ("bm", "bam", "Bambara"),
    ("bn", "ben", "Bengali"),
    ("bo", "bod", "Tibetan"),
    ("br", "bre", "Breton"),
    ("bs", "bos", "Bosnian"),
    ("ca", "cat", "Catalan"),
    ("ce", "che", "Chechen"),
    ("ch", "cha", "Chamorro"),
    ("co", "cos", "Corsican"),
    ("cr", "cre", "Cree"),
    ("cs", "ces", "Czech"),
    ("cu", "chu", "Church Slavic"),
    ("cv", "chv", "Chuvash"),
    ("cy", "cym", "Welsh"),
    ("da", "dan", "Danish"),
    ("de", "deu", "German"),
    ("dv", "div", "Divehi"),
    ("dz", "dzo", "Dzongkha"),
    ("ee", "ewe", "Ewe"),
    ("el", "ell", "Greek"),
    ("en", "eng", "English"),
    ("eo", "epo", "Esperanto"),
    ("es", "spa", "Spanish"),
    ("et", "est", "Estonian"),
    ("eu", "eus", "Basque"),
    ("fa", "fas", "Persian"),
    ("ff", "ful", "Fulah"),
    ("fi", "fin", "Finnish"),
    ("fj", "fij", "Fijian"),
    ("fo", "fao", "Faroese"),
    ("fr", "fra", "French"),
    ("fy", "fry", "Western Frisian"),
    ("ga", "gle", "Irish"),
    ("gd", "gla", "Gaelic"),
    ("gl", "glg", "Galician"),
    ("gn", "grn", "Guarani"),
    ("gu", "guj", "Gujarati"),
    ("gv", "glv", "Manx"),
    ("ha", "hau", "Hausa"),
    ("he", "heb", "Hebrew"),
    ("hi", "hin", "Hindi"),
    ("ho", "hmo", "Hiri Motu"),
    ("hr", "hrv", "Croatian"),
    ("ht", "hat", "Haitian"),
    ("hu", "hun", "Hungarian"),
    ("hy", "hye", "Armenian"),
    ("hz", "her", "Herero"),
    ("ia", "ina", "Interlingua"),
    ("id", "ind", "Indonesian"),
    ("ie", "ile", "Interlingue"),
    ("ig", "ibo", "Igbo"),
    ("ii", "iii", "Sichuan Yi"),
    ("ik", "ipk", "Inupiaq"),
    ("io", "ido", "Ido"),
    ("is", "isl", "Icelandic"),
    ("it", "ita", "Italian"),
    ("iu", "iku", "Inuktitut"),
    ("ja", "jpn", "Japanese"),
    ("jv", "jav", "Javanese"),
    ("ka", "kat", "Georgian"),
    ("kg", "kon", "Kongo"),
    ("ki", "kik", "Kikuyu"),
    ("kj", "kua", "Kuanyama"),
    ("kk", "kaz", "Kazakh"),
    ("kl", "kal", "Kalaallisut"),
    ("km", "khm", "Khmer"),
    ("kn", "kan", "Kannada"),
    ("ko", "kor", "Korean"),
    ("kr", "kau", "Kanuri"),
    ("ks", "kas", "Kashmiri"),
    ("ku", "kur", "Kurdish"),
    ("kv", "kom", "Komi"),
    ("kw", "cor", "Cornish"),
    ("ky", "kir", "Kirghiz"),
    ("la", "lat", "Latin"),
    ("lb", "ltz", "Luxembourgish"),
    ("lg", "lug", "Ganda"),
    ("li", "lim", "Limburgan"),
    ("ln", "lin", "Lingala"),
    ("lo", "lao", "Lao"),
    ("lt", "lit", "Lithuanian"),
    ("lu", "lub", "Luba-Katanga"),
    ("lv", "lav", "Latvian"),
    ("mg", "mlg", "Malagasy"),
    ("mh", "mah", "Marshallese"),
    ("mi", "mri", "Maori"),
    ("mk", "mkd", "Macedonian"),
    ("ml", "mal", "Malayalam"),
    ("mn", "mon", "Mongolian"),
    ("mr", "mar", "Marathi"),
    ("ms", "msa", "Malay"),
    ("mt", "mlt", "Maltese"),
    ("my", "mya", "Burmese"),
    ("na", "nau", "Nauru"),
    ("nb", "nob", "Norwegian Bokmal"),
    ("nd", "nde", "North Ndebele"),
    ("ne", "nep", "Nepali"),
    ("ng", "ndo", "Ndonga"),
    ("nl", "nld", "Dutch"),
    ("nn", "nno", "Norwegian Nynorsk"),
    ("no", "nor", "Norwegian"),
    ("nr", "nbl", "South Ndebele"),
    ("nv", "nav", "Navajo"),
    ("ny", "nya", "Chichewa"),
    ("oc", "oci", "Occitan"),
    ("oj", "oji", "Ojibwa"),
    ("om", "orm", "Oromo"),
    ("or", "ori", "Oriya"),
    ("os", "oss", "Ossetian"),
    ("pa", "pan", "Punjabi"),
    ("pi", "pli", "Pali"),
    ("pl", "pol", "Polish"),
    ("ps", "pus", "Pashto"),
    ("pt", "por", "Portuguese"),
    ("qu", "que", "Quechua"),
    ("rm", "roh", "Romansh"),
    ("rn", "run", "Rundi"),
    ("ro", "ron", "Romanian"),
    ("ru", "rus", "Russian"),
    ("rw", "kin", "Kinyarwanda"),
    ("sa", "san", "Sanskrit"),
    ("sc", "srd", "Sardinian"),
    ("sd", "snd", "Sindhi"),
    ("se", "sme", "Northern Sami"),
    ("sg", "sag", "Sango"),
    ("si", "sin", "Sinhala"),
    ("sk", "slk", "Slovak"),
    ("sl", "slv", "Slovenian"),
    ("sm", "smo", "Samoan"),
    ("sn", "sna", "Shona"),
    ("so", "som", "Somali"),
    ("sq", "sqi", "Albanian"),
    ("sr", "srp", "Serbian"),
    ("ss", "ssw", "Swati"),
    ("st", "sot", "Southern Sotho"),
    ("su", "sun", "Sundanese"),
    ("sv", "swe", "Swedish"),
    ("sw", "swa", "Swahili"),
    ("ta", "tam", "Tamil"),
    ("te", "tel", "Telugu"),
    ("tg", "tgk", "Tajik"),
    ("th", "tha", "Thai"),
    ("ti", "tir", "Tigrinya"),
    ("tk", "tuk", "Turkmen"),
    ("tl", "tgl", "Tagalog"),
    ("tn", "tsn", "Tswana"),
    ("to", "ton", "Tonga"),
    ("tr", "tur", "Turkish"),
    ("ts", "tso", "Tsonga"),
    ("tt", "tat", "Tatar"),
    ("tw", "twi", "Twi"),
    ("ty", "tah", "Tahitian"),
    ("ug", "uig", "Uighur"),
    ("uk", "ukr", "Ukrainian"),
    ("ur", "urd", "Urdu"),
    ("uz", "uzb", "Uzbek"),
    ("ve", "ven", "Venda"),
    ("vi", "vie", "Vietnamese"),
    ("vo", "vol", "Volapuk"),
    ("wa", "wln", "Walloon"),
    ("wo", "wol", "Wolof"),
    ("xh", "xho", "Xhosa"),
    ("yi", "yid", "Yiddish"),
    ("yo", "yor", "Yoruba"),
    ("za", "zha", "Zhuang"),
    ("zh", "zho", "Chinese"),
    ("zu", "zul", "Zulu"),
];

/// Provider-specific display names that are not plain ISO names.
pub(crate) const NAME_ALIASES: &[(&str, &str)] = &[
    ("Portuguese (Brazil)", "por"),
    ("Spanish (Latino)", "spa"),
    ("Flemish", "nld"),
    ("Mandarin", "zho"),
    ("Cantonese", "zho"),
    ("Farsi", "fas"),
    ("Tagalog", "tgl"),
    ("Filipino", "tgl"),
    ("Norwegian Bokmål", "nob"),
    ("Modern Greek", "ell"),
];

/// ISO 639-2/B codes and their terminology counterparts.
pub(crate) const BIBLIOGRAPHIC: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("mao", "mri"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("tib", "bod"),
    ("wel", "cym"),
];

/// Immutable lookup tables, built once and handed to the resolver.
#[derive(Debug)]
pub struct LanguageTable {
    two_letter: HashMap<&'static str, &'static str>,
    by_name: HashMap<String, &'static str>,
    three_letter: HashMap<&'static str, &'static str>,
    bibliographic: HashMap<&'static str, &'static str>,
}

impl LanguageTable {
    /// Build the tables from the static rows.
    pub fn new() -> Self {
        let mut two_letter = HashMap::with_capacity(LANGUAGES.len());
        let mut by_name = HashMap::with_capacity(LANGUAGES.len() + NAME_ALIASES.len());
        let mut three_letter = HashMap::with_capacity(LANGUAGES.len());

        for &(iso1, iso3, name) in LANGUAGES {
            two_letter.insert(iso1, iso3);
            by_name.insert(name.to_lowercase(), iso3);
            three_letter.insert(iso3, name);
        }
        for &(name, iso3) in NAME_ALIASES {
            by_name.insert(name.to_lowercase(), iso3);
        }

        Self {
            two_letter,
            by_name,
            three_letter,
            bibliographic: BIBLIOGRAPHIC.iter().copied().collect(),
        }
    }

    /// Shared instance, constructed on first use.
    pub fn builtin() -> &'static LanguageTable {
        static TABLE: OnceLock<LanguageTable> = OnceLock::new();
        TABLE.get_or_init(LanguageTable::new)
    }

    /// Three-letter code for a two-letter code.
    pub fn from_two_letter(&self, code: &str) -> Option<&'static str> {
        self.two_letter.get(code.to_ascii_lowercase().as_str()).copied()
    }

    /// Three-letter code for an English name (case-insensitive).
    pub fn from_name(&self, name: &str) -> Option<&'static str> {
        self.by_name.get(&name.trim().to_lowercase()).copied()
    }

    /// Canonical three-letter code for a three-letter code, mapping
    /// bibliographic forms (`fre`) to terminology forms (`fra`).
    pub fn from_three_letter(&self, code: &str) -> Option<&'static str> {
        let code = code.to_ascii_lowercase();
        if let Some(&t) = self.bibliographic.get(code.as_str()) {
            return Some(t);
        }
        self.three_letter.get_key_value(code.as_str()).map(|(k, _)| *k)
    }

    /// English name of a three-letter code, for log output.
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.from_three_letter(code)
            .and_then(|c| self.three_letter.get(c).copied())
    }

    /// Number of ISO 639-1 rows.
    pub fn len(&self) -> usize {
        self.two_letter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.two_letter.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical comparison form of a stream language tag: lowercase, with
/// bibliographic codes folded onto terminology codes. Unknown tags are only
/// lowercased so they still compare equal to themselves.
pub fn canonical_code(code: &str) -> String {
    let lower = code.trim().to_ascii_lowercase();
    match BIBLIOGRAPHIC.iter().find(|(b, _)| *b == lower) {
        Some((_, t)) => t.to_string(),
        None => lower,
    }
}
