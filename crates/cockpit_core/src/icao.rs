//! ICAO airport code to country / language lookup
//!
//! Not every country has a unique ICAO prefix and not every prefix is a
//! single letter pair, so the table is ordered with longer (more specific)
//! prefixes ahead of the shorter ones they would otherwise be shadowed by.
//! The first matching entry wins.

/// One ICAO prefix and the region it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcaoRegion {
    pub prefix: &'static str,
    /// ISO 3166-1 alpha-2 country code
    pub country: &'static str,
    /// Principal language code, `"XX"` when unknown
    pub language: &'static str,
}

/// Language code reported when no better mapping exists.
pub const UNKNOWN_LANGUAGE: &str = "XX";

const fn region(prefix: &'static str, country: &'static str, language: &'static str) -> IcaoRegion {
    IcaoRegion {
        prefix,
        country,
        language,
    }
}

static REGIONS: &[IcaoRegion] = &[
    region("AG", "SB", "XX"),  // Solomon Islands
    region("AN", "NR", "XX"),  // Nauru
    region("AY", "PG", "XX"),  // Papua New Guinea
    region("BG", "GL", "kl"),  // Greenland
    region("BI", "IS", "is"),  // Iceland
    region("BK", "XK", "sq"),  // Kosovo
    region("C", "CA", "en"),   // Canada
    region("DA", "DZ", "ar"),  // Algeria
    region("DB", "BJ", "fr"),  // Benin
    region("DF", "BF", "fr"),  // Burkina Faso
    region("DG", "GH", "en"),  // Ghana
    region("DI", "CI", "fr"),  // Ivory Coast
    region("DN", "NG", "en"),  // Nigeria
    region("DR", "NE", "XX"),  // Niger
    region("DT", "TN", "ar"),  // Tunisia
    region("DX", "TG", "XX"),  // Togo
    region("EB", "BE", "fr"),  // Belgium
    region("ED", "DE", "de"),  // Germany
    region("EE", "EE", "et"),  // Estonia
    region("EF", "FI", "sv"),  // Finland
    region("EG", "GB", "en"),  // United Kingdom
    region("EG", "GS", "XX"),  // South Georgia and the South Sandwich Islands
    region("EH", "NL", "nl"),  // Netherlands
    region("EI", "IE", "en"),  // Ireland
    region("EK", "DK", "da"),  // Denmark
    region("EL", "LU", "de"),  // Luxembourg
    region("EN", "MH", "en"),  // Marshall Islands
    region("EN", "NO", "nn"),  // Norway
    region("EP", "PL", "pl"),  // Poland
    region("ES", "SE", "sv"),  // Sweden
    region("ET", "DE", "de"),  // Germany
    region("EV", "LV", "lv"),  // Latvia
    region("EY", "LT", "lt"),  // Lithuania
    region("FA", "ZA", "en"),  // South Africa
    region("FB", "BW", "en"),  // Botswana
    region("FC", "CG", "fr"),  // Republic of the Congo
    region("FD", "SZ", "en"),  // Swaziland
    region("FE", "CF", "fr"),  // Central African Republic
    region("FG", "GQ", "es"),  // Equatorial Guinea
    region("FH", "SH", "en"),  // Saint Helena Ascension and Tristan da Cunha
    region("FI", "MU", "XX"),  // Mauritius
    region("FJ", "IO", "en"),  // British Indian Ocean Territory
    region("FK", "CM", "fr"),  // Cameroon
    region("FL", "ZM", "XX"),  // Zambia
    region("FMC", "KM", "XX"), // Comoros
    region("FME", "RE", "XX"), // Réunion
    region("FMM", "MG", "fr"), // Madagascar
    region("FMN", "MG", "fr"), // Madagascar
    region("FMS", "MG", "fr"), // Madagascar
    region("FM", "YT", "XX"),  // Mayotte
    region("FN", "AO", "XX"),  // Angola
    region("FO", "GA", "XX"),  // Gabon
    region("FP", "ST", "XX"),  // São Tomé and Príncipe
    region("FQ", "MZ", "pt"),  // Mozambique
    region("FS", "SC", "XX"),  // Seychelles
    region("FT", "TD", "XX"),  // Chad
    region("FV", "ZW", "en"),  // Zimbabwe
    region("FW", "MW", "XX"),  // Malawi
    region("FX", "LS", "XX"),  // Lesotho
    region("FY", "NA", "XX"),  // Namibia
    region("FZ", "CD", "XX"),  // Democratic Republic of the Congo
    region("GA", "ML", "XX"),  // Mali
    region("GB", "GM", "XX"),  // Gambia
    region("GC", "ES", "es"),  // Spain
    region("GE", "ES", "es"),  // Spain
    region("GF", "SL", "XX"),  // Sierra Leone
    region("GG", "GW", "XX"),  // Guinea-Bissau
    region("GL", "LR", "XX"),  // Liberia
    region("GM", "MA", "ar"),  // Morocco
    region("GO", "SN", "fr"),  // Senegal
    region("GQ", "MR", "XX"),  // Mauritania
    region("GS", "EH", "XX"),  // Western Sahara
    region("GU", "GN", "XX"),  // Guinea
    region("GV", "CV", "XX"),  // Cape Verde
    region("HA", "ET", "XX"),  // Ethiopia
    region("HB", "BI", "XX"),  // Burundi
    region("HC", "SO", "XX"),  // Somalia
    region("HD", "DJ", "XX"),  // Djibouti
    region("HE", "EG", "ar"),  // Egypt
    region("HH", "ER", "XX"),  // Eritrea
    region("HK", "KE", "sw"),  // Kenya
    region("HL", "LY", "ar"),  // Libya
    region("HR", "RW", "XX"),  // Rwanda
    region("HS", "SD", "XX"),  // Sudan
    region("HS", "SS", "XX"),  // South Sudan
    region("HT", "TZ", "XX"),  // Tanzania
    region("HU", "UG", "XX"),  // Uganda
    region("K", "US", "en"),   // United States
    region("LA", "AL", "sq"),  // Albania
    region("LB", "BG", "bg"),  // Bulgaria
    region("LC", "CY", "XX"),  // Cyprus
    region("LD", "HR", "hr"),  // Croatia
    region("LE", "ES", "es"),  // Spain
    region("LF", "FR", "fr"),  // France
    region("LF", "PM", "fr"),  // Saint Pierre and Miquelon
    region("LG", "GR", "el"),  // Greece
    region("LH", "HU", "hu"),  // Hungary
    region("LI", "IT", "it"),  // Italy
    region("LJ", "SI", "sl"),  // Slovenia
    region("LK", "CZ", "cs"),  // Czech Republic
    region("LL", "IL", "he"),  // Israel
    region("LM", "MT", "mt"),  // Malta
    region("LN", "MC", "fr"),  // Monaco
    region("LO", "AT", "de"),  // Austria
    region("LP", "PT", "pt"),  // Portugal
    region("LQ", "BA", "bs"),  // Bosnia and Herzegovina
    region("LR", "RO", "ro"),  // Romania
    region("LS", "CH", "de"),  // Switzerland
    region("LT", "TR", "tr"),  // Turkey
    region("LU", "MD", "ro"),  // Moldova
    region("LV", "PS", "ar"),  // Palestine
    region("LW", "MK", "mk"),  // Macedonia
    region("LX", "GI", "en"),  // Gibraltar
    region("LY", "ME", "sr"),  // Montenegro
    region("LY", "RS", "sr"),  // Serbia
    region("LZ", "SK", "sk"),  // Slovakia
    region("MB", "TC", "en"),  // Turks and Caicos Islands
    region("MD", "DO", "es"),  // Dominican Republic
    region("MG", "GT", "es"),  // Guatemala
    region("MH", "HN", "es"),  // Honduras
    region("MI", "VI", "en"),  // United States Virgin Islands
    region("MK", "JM", "en"),  // Jamaica
    region("MM", "MX", "es"),  // Mexico
    region("MN", "NI", "es"),  // Nicaragua
    region("MP", "PA", "es"),  // Panama
    region("MR", "CR", "es"),  // Costa Rica
    region("MS", "SV", "es"),  // El Salvador
    region("MT", "HT", "fr"),  // Haiti
    region("MU", "CU", "es"),  // Cuba
    region("MW", "KY", "en"),  // Cayman Islands
    region("MY", "BS", "en"),  // Bahamas
    region("MZ", "BZ", "en"),  // Belize
    region("NC", "CK", "en"),  // Cook Islands
    region("NE", "CL", "es"),  // Chile
    region("NFT", "TO", "XX"), // Tonga
    region("NF", "FJ", "XX"),  // Fiji
    region("NGF", "TV", "XX"), // Tuvalu
    region("NG", "KI", "XX"),  // Kiribati
    region("NI", "NU", "XX"),  // Niue
    region("NL", "WF", "XX"),  // Wallis and Futuna
    region("NS", "AS", "en"),  // American Samoa
    region("NS", "WS", "XX"),  // Samoa
    region("NT", "PF", "fr"),  // French Polynesia
    region("NV", "VU", "XX"),  // Vanuatu
    region("NW", "NC", "XX"),  // New Caledonia
    region("NZ", "NZ", "en"),  // New Zealand
    region("OA", "AF", "ps"),  // Afghanistan
    region("OB", "BH", "ar"),  // Bahrain
    region("OE", "SA", "ar"),  // Saudi Arabia
    region("OI", "IR", "fa"),  // Iran
    region("OJ", "JO", "ar"),  // Jordan
    region("OJ", "PS", "ar"),  // Palestine
    region("OK", "KW", "ar"),  // Kuwait
    region("OL", "LB", "ar"),  // Lebanon
    region("OM", "AE", "ar"),  // United Arab Emirates
    region("OO", "OM", "ar"),  // Oman
    region("OP", "PK", "ur"),  // Pakistan
    region("OR", "IQ", "ar"),  // Iraq
    region("OS", "SY", "syr"), // Syria
    region("OT", "QA", "ar"),  // Qatar
    region("OY", "YE", "ar"),  // Yemen
    region("PA", "US", "en"),  // United States
    region("PB", "US", "en"),  // United States
    region("PF", "US", "en"),  // United States
    region("PG", "GU", "en"),  // Guam
    region("PG", "MP", "en"),  // Northern Mariana Islands
    region("PH", "US", "en"),  // United States
    region("PJ", "US", "en"),  // United States
    region("PK", "MH", "en"),  // Marshall Islands
    region("PL", "NZ", "en"),  // New Zealand
    region("PL", "US", "en"),  // United States
    region("PM", "US", "en"),  // United States
    region("PO", "US", "en"),  // United States
    region("PP", "US", "en"),  // United States
    region("PT", "FM", "XX"),  // Federated States of Micronesia
    region("PT", "PW", "XX"),  // Palau
    region("PW", "US", "en"),  // United States
    region("RC", "TW", "zh"),  // Taiwan
    region("RJ", "JP", "ja"),  // Japan
    region("RK", "KR", "ko"),  // South Korea
    region("RO", "JP", "ja"),  // Japan
    region("RP", "PH", "en"),  // Philippines
    region("SA", "AR", "es"),  // Argentina
    region("SB", "BR", "pt"),  // Brazil
    region("SC", "CL", "es"),  // Chile
    region("SD", "BR", "pt"),  // Brazil
    region("SE", "EC", "es"),  // Ecuador
    region("SF", "FK", "en"),  // Falkland Islands
    region("SG", "PY", "es"),  // Paraguay
    region("SK", "CO", "es"),  // Colombia
    region("SL", "BO", "es"),  // Bolivia
    region("SM", "SR", "XX"),  // Suriname
    region("SN", "BR", "pt"),  // Brazil
    region("SO", "GF", "fr"),  // French Guiana
    region("SP", "PE", "es"),  // Peru
    region("SS", "BR", "pt"),  // Brazil
    region("SU", "UY", "es"),  // Uruguay
    region("SV", "VE", "es"),  // Venezuela
    region("SW", "BR", "pt"),  // Brazil
    region("SY", "GY", "XX"),  // Guyana
    region("TA", "AG", "XX"),  // Antigua and Barbuda
    region("TB", "BB", "XX"),  // Barbados
    region("TD", "DM", "XX"),  // Dominica
    region("TF", "BL", "fr"),  // Saint Barthélemy
    region("TF", "GP", "fr"),  // Guadeloupe
    region("TF", "MF", "fr"),  // Saint Martin
    region("TF", "MQ", "fr"),  // Martinique
    region("TG", "GD", "en"),  // Grenada
    region("TI", "VI", "en"),  // United States Virgin Islands
    region("TJ", "PR", "es"),  // Puerto Rico
    region("TK", "KN", "en"),  // Saint Kitts and Nevis
    region("TL", "LC", "en"),  // Saint Lucia
    region("TN", "AW", "nl"),  // Aruba
    region("TN", "BQ", "nl"),  // Caribbean Netherlands
    region("TN", "CW", "nl"),  // Curaçao
    region("TN", "SX", "nl"),  // Sint Maarten
    region("TQ", "AI", "XX"),  // Anguilla
    region("TR", "MS", "XX"),  // Montserrat
    region("TT", "TT", "en"),  // Trinidad and Tobago
    region("TU", "VG", "en"),  // British Virgin Islands
    region("TV", "VC", "XX"),  // Saint Vincent and the Grenadines
    region("TX", "BM", "XX"),  // Bermuda
    region("UA", "KZ", "ky"),  // Kazakhstan
    region("UB", "AZ", "XX"),  // Azerbaijan
    region("UC", "KG", "XX"),  // Kyrgyzstan
    region("UD", "AM", "XX"),  // Armenia
    region("UE", "RU", "ru"),  // Russia
    region("UG", "GE", "ka"),  // Georgia
    region("UH", "RU", "ru"),  // Russia
    region("UI", "RU", "ru"),  // Russia
    region("UK", "UA", "uk"),  // Ukraine
    region("UL", "RU", "ru"),  // Russia
    region("UM", "BY", "ru"),  // Belarus
    region("UN", "RU", "ru"),  // Russia
    region("UO", "RU", "ru"),  // Russia
    region("UR", "RU", "ru"),  // Russia
    region("US", "RU", "ru"),  // Russia
    region("UT", "TJ", "tg"),  // Tajikistan
    region("UT", "TM", "XX"),  // Turkmenistan
    region("UT", "UZ", "uz"),  // Uzbekistan
    region("UU", "RU", "ru"),  // Russia
    region("UW", "RU", "ru"),  // Russia
    region("VA", "IN", "hi"),  // India
    region("VB", "MM", "XX"),  // Myanmar
    region("VC", "LK", "XX"),  // Sri Lanka
    region("VD", "KH", "XX"),  // Cambodia
    region("VE", "IN", "hi"),  // India
    region("VG", "BD", "XX"),  // Bangladesh
    region("VH", "HK", "zh"),  // Hong Kong
    region("VI", "IN", "hi"),  // India
    region("VL", "LA", "XX"),  // Laos
    region("VM", "MO", "zh"),  // Macau
    region("VN", "NP", "XX"),  // Nepal
    region("VO", "IN", "hi"),  // India
    region("VQ", "BT", "XX"),  // Bhutan
    region("VR", "MV", "div"), // Maldives
    region("VT", "TH", "th"),  // Thailand
    region("VV", "VN", "vi"),  // Vietnam
    region("VY", "MM", "XX"),  // Myanmar
    region("WA", "ID", "id"),  // Indonesia
    region("WB", "BN", "ms"),  // Brunei
    region("WB", "MY", "ms"),  // Malaysia
    region("WI", "ID", "id"),  // Indonesia
    region("WM", "MY", "ms"),  // Malaysia
    region("WP", "TL", "XX"),  // Timor-Leste
    region("WS", "SG", "zh"),  // Singapore
    region("YP", "CX", "XX"),  // Christmas Island
    region("Y", "AU", "en"),   // Australia
    region("ZB", "CN", "zh"),  // China
    region("ZG", "CN", "zh"),  // China
    region("ZH", "CN", "zh"),  // China
    region("ZJ", "CN", "zh"),  // China
    region("ZK", "KP", "ko"),  // North Korea
    region("ZL", "CN", "zh"),  // China
    region("ZM", "MN", "mn"),  // Mongolia
    region("ZP", "CN", "zh"),  // China
    region("ZS", "CN", "zh"),  // China
    region("ZT", "CN", "zh"),  // China
    region("ZU", "CN", "zh"),  // China
    region("ZW", "CN", "zh"),  // China
    region("ZY", "CN", "zh"),  // China
];

/// First table entry whose prefix matches `icao`.
pub fn lookup(icao: &str) -> Option<&'static IcaoRegion> {
    let found = REGIONS.iter().find(|r| icao.starts_with(r.prefix));
    if found.is_none() {
        tracing::trace!(icao, "no ICAO region matches");
    }
    found
}

/// Country code of the airport `icao`, e.g. `"DE"` for `"EDDF"`.
pub fn icao_to_country(icao: &str) -> Option<&'static str> {
    lookup(icao).map(|region| region.country)
}

/// Principal language spoken at the airport `icao`.
///
/// Only a rough guess: airport-to-language is anything but clear cut.
/// Returns [`UNKNOWN_LANGUAGE`] when nothing suitable is known.
///
/// Matches by prefix, the same way as [`icao_to_country`]. Lookups that
/// compare the whole code against the table (as the C `icao2lang` does)
/// only answer for inputs equal to a prefix, `"ED"` but not `"EDDF"`; this
/// one answers `"de"` for both.
pub fn icao_to_language(icao: &str) -> &'static str {
    lookup(icao).map_or(UNKNOWN_LANGUAGE, |region| region.language)
}

/// Every region entry, in match order.
pub fn regions() -> &'static [IcaoRegion] {
    REGIONS
}
