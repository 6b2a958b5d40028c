//! Selectable country catalog: ISO code, display name and flag
//!
//! The catalog is wider than the profile table. Catalog entries without a
//! profile still generate snapshots, using the default profile.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl CountryInfo {
    const fn new(code: &'static str, name: &'static str, flag: &'static str) -> Self {
        Self { code, name, flag }
    }
}

/// Catalog in display order (grouped by region)
pub const CATALOG: &[CountryInfo] = &[
    CountryInfo::new("US", "United States", "🇺🇸"),
    CountryInfo::new("CA", "Canada", "🇨🇦"),
    CountryInfo::new("MX", "Mexico", "🇲🇽"),
    CountryInfo::new("GB", "United Kingdom", "🇬🇧"),
    CountryInfo::new("DE", "Germany", "🇩🇪"),
    CountryInfo::new("FR", "France", "🇫🇷"),
    CountryInfo::new("IT", "Italy", "🇮🇹"),
    CountryInfo::new("ES", "Spain", "🇪🇸"),
    CountryInfo::new("NL", "Netherlands", "🇳🇱"),
    CountryInfo::new("CH", "Switzerland", "🇨🇭"),
    CountryInfo::new("SE", "Sweden", "🇸🇪"),
    CountryInfo::new("NO", "Norway", "🇳🇴"),
    CountryInfo::new("DK", "Denmark", "🇩🇰"),
    CountryInfo::new("FI", "Finland", "🇫🇮"),
    CountryInfo::new("BE", "Belgium", "🇧🇪"),
    CountryInfo::new("AT", "Austria", "🇦🇹"),
    CountryInfo::new("IE", "Ireland", "🇮🇪"),
    CountryInfo::new("PT", "Portugal", "🇵🇹"),
    CountryInfo::new("GR", "Greece", "🇬🇷"),
    CountryInfo::new("PL", "Poland", "🇵🇱"),
    CountryInfo::new("CZ", "Czech Republic", "🇨🇿"),
    CountryInfo::new("HU", "Hungary", "🇭🇺"),
    CountryInfo::new("RO", "Romania", "🇷🇴"),
    CountryInfo::new("BG", "Bulgaria", "🇧🇬"),
    CountryInfo::new("HR", "Croatia", "🇭🇷"),
    CountryInfo::new("SK", "Slovakia", "🇸🇰"),
    CountryInfo::new("SI", "Slovenia", "🇸🇮"),
    CountryInfo::new("LT", "Lithuania", "🇱🇹"),
    CountryInfo::new("LV", "Latvia", "🇱🇻"),
    CountryInfo::new("EE", "Estonia", "🇪🇪"),
    CountryInfo::new("RU", "Russia", "🇷🇺"),
    CountryInfo::new("UA", "Ukraine", "🇺🇦"),
    CountryInfo::new("TR", "Turkey", "🇹🇷"),
    CountryInfo::new("CN", "China", "🇨🇳"),
    CountryInfo::new("JP", "Japan", "🇯🇵"),
    CountryInfo::new("IN", "India", "🇮🇳"),
    CountryInfo::new("KR", "South Korea", "🇰🇷"),
    CountryInfo::new("ID", "Indonesia", "🇮🇩"),
    CountryInfo::new("TH", "Thailand", "🇹🇭"),
    CountryInfo::new("MY", "Malaysia", "🇲🇾"),
    CountryInfo::new("SG", "Singapore", "🇸🇬"),
    CountryInfo::new("PH", "Philippines", "🇵🇭"),
    CountryInfo::new("VN", "Vietnam", "🇻🇳"),
    CountryInfo::new("BD", "Bangladesh", "🇧🇩"),
    CountryInfo::new("PK", "Pakistan", "🇵🇰"),
    CountryInfo::new("LK", "Sri Lanka", "🇱🇰"),
    CountryInfo::new("MM", "Myanmar", "🇲🇲"),
    CountryInfo::new("KH", "Cambodia", "🇰🇭"),
    CountryInfo::new("LA", "Laos", "🇱🇦"),
    CountryInfo::new("NP", "Nepal", "🇳🇵"),
    CountryInfo::new("BT", "Bhutan", "🇧🇹"),
    CountryInfo::new("MV", "Maldives", "🇲🇻"),
    CountryInfo::new("AF", "Afghanistan", "🇦🇫"),
    CountryInfo::new("IR", "Iran", "🇮🇷"),
    CountryInfo::new("IQ", "Iraq", "🇮🇶"),
    CountryInfo::new("SA", "Saudi Arabia", "🇸🇦"),
    CountryInfo::new("AE", "United Arab Emirates", "🇦🇪"),
    CountryInfo::new("QA", "Qatar", "🇶🇦"),
    CountryInfo::new("KW", "Kuwait", "🇰🇼"),
    CountryInfo::new("BH", "Bahrain", "🇧🇭"),
    CountryInfo::new("OM", "Oman", "🇴🇲"),
    CountryInfo::new("YE", "Yemen", "🇾🇪"),
    CountryInfo::new("JO", "Jordan", "🇯🇴"),
    CountryInfo::new("LB", "Lebanon", "🇱🇧"),
    CountryInfo::new("SY", "Syria", "🇸🇾"),
    CountryInfo::new("IL", "Israel", "🇮🇱"),
    CountryInfo::new("PS", "Palestine", "🇵🇸"),
    CountryInfo::new("CY", "Cyprus", "🇨🇾"),
    CountryInfo::new("GE", "Georgia", "🇬🇪"),
    CountryInfo::new("AM", "Armenia", "🇦🇲"),
    CountryInfo::new("AZ", "Azerbaijan", "🇦🇿"),
    CountryInfo::new("KZ", "Kazakhstan", "🇰🇿"),
    CountryInfo::new("UZ", "Uzbekistan", "🇺🇿"),
    CountryInfo::new("TM", "Turkmenistan", "🇹🇲"),
    CountryInfo::new("KG", "Kyrgyzstan", "🇰🇬"),
    CountryInfo::new("TJ", "Tajikistan", "🇹🇯"),
    CountryInfo::new("MN", "Mongolia", "🇲🇳"),
    CountryInfo::new("ZA", "South Africa", "🇿🇦"),
    CountryInfo::new("NG", "Nigeria", "🇳🇬"),
    CountryInfo::new("EG", "Egypt", "🇪🇬"),
    CountryInfo::new("KE", "Kenya", "🇰🇪"),
    CountryInfo::new("ET", "Ethiopia", "🇪🇹"),
    CountryInfo::new("GH", "Ghana", "🇬🇭"),
    CountryInfo::new("TZ", "Tanzania", "🇹🇿"),
    CountryInfo::new("UG", "Uganda", "🇺🇬"),
    CountryInfo::new("DZ", "Algeria", "🇩🇿"),
    CountryInfo::new("MA", "Morocco", "🇲🇦"),
    CountryInfo::new("TN", "Tunisia", "🇹🇳"),
    CountryInfo::new("LY", "Libya", "🇱🇾"),
    CountryInfo::new("SD", "Sudan", "🇸🇩"),
    CountryInfo::new("ZW", "Zimbabwe", "🇿🇼"),
    CountryInfo::new("ZM", "Zambia", "🇿🇲"),
    CountryInfo::new("BW", "Botswana", "🇧🇼"),
    CountryInfo::new("NA", "Namibia", "🇳🇦"),
    CountryInfo::new("MZ", "Mozambique", "🇲🇿"),
    CountryInfo::new("MW", "Malawi", "🇲🇼"),
    CountryInfo::new("RW", "Rwanda", "🇷🇼"),
    CountryInfo::new("BI", "Burundi", "🇧🇮"),
    CountryInfo::new("DJ", "Djibouti", "🇩🇯"),
    CountryInfo::new("SO", "Somalia", "🇸🇴"),
    CountryInfo::new("ER", "Eritrea", "🇪🇷"),
    CountryInfo::new("SS", "South Sudan", "🇸🇸"),
    CountryInfo::new("CF", "Central African Republic", "🇨🇫"),
    CountryInfo::new("TD", "Chad", "🇹🇩"),
    CountryInfo::new("CM", "Cameroon", "🇨🇲"),
    CountryInfo::new("GA", "Gabon", "🇬🇦"),
    CountryInfo::new("GQ", "Equatorial Guinea", "🇬🇶"),
    CountryInfo::new("ST", "São Tomé and Príncipe", "🇸🇹"),
    CountryInfo::new("AO", "Angola", "🇦🇴"),
    CountryInfo::new("CD", "Democratic Republic of Congo", "🇨🇩"),
    CountryInfo::new("CG", "Republic of Congo", "🇨🇬"),
    CountryInfo::new("CI", "Ivory Coast", "🇨🇮"),
    CountryInfo::new("BF", "Burkina Faso", "🇧🇫"),
    CountryInfo::new("ML", "Mali", "🇲🇱"),
    CountryInfo::new("NE", "Niger", "🇳🇪"),
    CountryInfo::new("SN", "Senegal", "🇸🇳"),
    CountryInfo::new("GM", "Gambia", "🇬🇲"),
    CountryInfo::new("GW", "Guinea-Bissau", "🇬🇼"),
    CountryInfo::new("GN", "Guinea", "🇬🇳"),
    CountryInfo::new("SL", "Sierra Leone", "🇸🇱"),
    CountryInfo::new("LR", "Liberia", "🇱🇷"),
    CountryInfo::new("TG", "Togo", "🇹🇬"),
    CountryInfo::new("BJ", "Benin", "🇧🇯"),
    CountryInfo::new("MR", "Mauritania", "🇲🇷"),
    CountryInfo::new("MU", "Mauritius", "🇲🇺"),
    CountryInfo::new("SC", "Seychelles", "🇸🇨"),
    CountryInfo::new("MG", "Madagascar", "🇲🇬"),
    CountryInfo::new("KM", "Comoros", "🇰🇲"),
    CountryInfo::new("LS", "Lesotho", "🇱🇸"),
    CountryInfo::new("SZ", "Eswatini", "🇸🇿"),
    CountryInfo::new("BR", "Brazil", "🇧🇷"),
    CountryInfo::new("AR", "Argentina", "🇦🇷"),
    CountryInfo::new("CL", "Chile", "🇨🇱"),
    CountryInfo::new("CO", "Colombia", "🇨🇴"),
    CountryInfo::new("PE", "Peru", "🇵🇪"),
    CountryInfo::new("VE", "Venezuela", "🇻🇪"),
    CountryInfo::new("EC", "Ecuador", "🇪🇨"),
    CountryInfo::new("BO", "Bolivia", "🇧🇴"),
    CountryInfo::new("PY", "Paraguay", "🇵🇾"),
    CountryInfo::new("UY", "Uruguay", "🇺🇾"),
    CountryInfo::new("GY", "Guyana", "🇬🇾"),
    CountryInfo::new("SR", "Suriname", "🇸🇷"),
    CountryInfo::new("GF", "French Guiana", "🇬🇫"),
    CountryInfo::new("AU", "Australia", "🇦🇺"),
    CountryInfo::new("NZ", "New Zealand", "🇳🇿"),
    CountryInfo::new("FJ", "Fiji", "🇫🇯"),
    CountryInfo::new("PG", "Papua New Guinea", "🇵🇬"),
    CountryInfo::new("SB", "Solomon Islands", "🇸🇧"),
    CountryInfo::new("VU", "Vanuatu", "🇻🇺"),
    CountryInfo::new("NC", "New Caledonia", "🇳🇨"),
    CountryInfo::new("PF", "French Polynesia", "🇵🇫"),
    CountryInfo::new("WS", "Samoa", "🇼🇸"),
    CountryInfo::new("TO", "Tonga", "🇹🇴"),
    CountryInfo::new("KI", "Kiribati", "🇰🇮"),
    CountryInfo::new("TV", "Tuvalu", "🇹🇻"),
    CountryInfo::new("NR", "Nauru", "🇳🇷"),
    CountryInfo::new("PW", "Palau", "🇵🇼"),
    CountryInfo::new("FM", "Micronesia", "🇫🇲"),
    CountryInfo::new("MH", "Marshall Islands", "🇲🇭"),
    CountryInfo::new("GT", "Guatemala", "🇬🇹"),
    CountryInfo::new("BZ", "Belize", "🇧🇿"),
    CountryInfo::new("SV", "El Salvador", "🇸🇻"),
    CountryInfo::new("HN", "Honduras", "🇭🇳"),
    CountryInfo::new("NI", "Nicaragua", "🇳🇮"),
    CountryInfo::new("CR", "Costa Rica", "🇨🇷"),
    CountryInfo::new("PA", "Panama", "🇵🇦"),
    CountryInfo::new("CU", "Cuba", "🇨🇺"),
    CountryInfo::new("JM", "Jamaica", "🇯🇲"),
    CountryInfo::new("HT", "Haiti", "🇭🇹"),
    CountryInfo::new("DO", "Dominican Republic", "🇩🇴"),
    CountryInfo::new("PR", "Puerto Rico", "🇵🇷"),
    CountryInfo::new("TT", "Trinidad and Tobago", "🇹🇹"),
    CountryInfo::new("BB", "Barbados", "🇧🇧"),
    CountryInfo::new("GD", "Grenada", "🇬🇩"),
    CountryInfo::new("VC", "Saint Vincent and the Grenadines", "🇻🇨"),
    CountryInfo::new("LC", "Saint Lucia", "🇱🇨"),
    CountryInfo::new("DM", "Dominica", "🇩🇲"),
    CountryInfo::new("AG", "Antigua and Barbuda", "🇦🇬"),
    CountryInfo::new("KN", "Saint Kitts and Nevis", "🇰🇳"),
    CountryInfo::new("BS", "Bahamas", "🇧🇸"),
];

/// Find a catalog entry by ISO code (case-insensitive)
pub fn find(code: &str) -> Option<&'static CountryInfo> {
    let code = code.trim();
    CATALOG.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Entries whose name contains `term`, case-insensitively. Empty term returns everything.
pub fn search(term: &str) -> Vec<&'static CountryInfo> {
    let needle = term.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .collect()
}
