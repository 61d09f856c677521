//! Place names and their abbreviations.

/// Brazilian states.
#[rustfmt::skip]
pub const STATES: &[(&str, &str)] = &[
    ("Acre", "AC"), ("Alagoas", "AL"), ("Amapá", "AP"), ("Amazonas", "AM"),
    ("Bahia", "BA"), ("Ceará", "CE"), ("Distrito Federal", "DF"),
    ("Espírito Santo", "ES"), ("Goiás", "GO"), ("Maranhão", "MA"),
    ("Mato Grosso", "MT"), ("Mato Grosso do Sul", "MS"), ("Minas Gerais", "MG"),
    ("Pará", "PA"), ("Paraíba", "PB"), ("Paraná", "PR"), ("Pernambuco", "PE"),
    ("Piauí", "PI"), ("Rio de Janeiro", "RJ"), ("Rio Grande do Norte", "RN"),
    ("Rio Grande do Sul", "RS"), ("Rondônia", "RO"), ("Roraima", "RR"),
    ("Santa Catarina", "SC"), ("São Paulo", "SP"), ("Sergipe", "SE"),
    ("Tocantins", "TO"),
];

/// Major Brazilian cities, abbreviated by airport or common code.
#[rustfmt::skip]
pub const CITIES: &[(&str, &str)] = &[
    ("Brasília", "BSB"), ("Salvador", "SSA"), ("Fortaleza", "FOR"),
    ("Belo Horizonte", "BH"), ("Curitiba", "CWB"), ("Recife", "REC"),
    ("Porto Alegre", "POA"), ("Goiânia", "GYN"), ("Belém", "BEL"),
    ("Manaus", "MAO"), ("Campinas", "CGN"), ("Guarulhos", "GRU"),
];

#[rustfmt::skip]
pub const COUNTRIES: &[(&str, &str)] = &[
    ("Brasil", "BR"), ("Argentina", "AR"), ("Chile", "CL"), ("Uruguai", "UY"),
    ("Paraguai", "PY"), ("Peru", "PE"), ("Colômbia", "CO"), ("Venezuela", "VE"),
    ("Equador", "EC"), ("Bolívia", "BO"), ("Estados Unidos", "EUA"),
    ("United States", "US"), ("Canadá", "CA"), ("México", "MX"), ("França", "FR"),
    ("Alemanha", "DE"), ("Espanha", "ES"), ("Itália", "IT"), ("Portugal", "PT"),
    ("Reino Unido", "UK"), ("China", "CN"), ("Japão", "JP"),
    ("Coreia do Sul", "KR"), ("Índia", "IN"), ("Austrália", "AU"),
];

#[rustfmt::skip]
pub const CONTINENTS: &[(&str, &str)] = &[
    ("América do Sul", "AS"), ("América do Norte", "AN"), ("Europa", "EU"),
    ("Ásia", "AS"), ("África", "AF"), ("Oceania", "OC"), ("Antártida", "AT"),
];

/// Unaccented spellings that the general dictionary pass should also catch.
#[rustfmt::skip]
pub const VARIATIONS: &[(&str, &str)] = &[
    ("ceara", "CE"), ("sao paulo", "SP"), ("brasilia", "BSB"),
];

/// Case- and diacritic-tolerant patterns applied before the dictionary pass.
#[rustfmt::skip]
pub const VARIATION_PATTERNS: &[(&str, &str)] = &[
    (r"(?i)\bcear[aá]\b", "CE"),
    (r"(?i)\bs[ãa]o\s+paulo\b", "SP"),
    (r"(?i)\brio\s+de\s+janeiro\b", "RJ"),
    (r"(?i)\bbras[ií]lia\b", "BSB"),
    (r"(?i)\bminas\s+gerais\b", "MG"),
];

pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    STATES
        .iter()
        .chain(CITIES)
        .chain(COUNTRIES)
        .chain(CONTINENTS)
        .copied()
}
