//! General-purpose abbreviations: units, calendar, organizations, titles,
//! business vocabulary and compass directions.

#[rustfmt::skip]
pub const MEASUREMENTS: &[(&str, &str)] = &[
    ("quilômetros", "km"), ("metros", "m"), ("centímetros", "cm"),
    ("milímetros", "mm"), ("quilogramas", "kg"), ("gramas", "g"),
    ("miligramas", "mg"), ("litros", "l"), ("mililitros", "ml"),
    ("kilometers", "km"), ("meters", "m"), ("centimeters", "cm"),
    ("millimeters", "mm"), ("kilograms", "kg"), ("grams", "g"),
    ("milligrams", "mg"), ("liters", "l"), ("milliliters", "ml"),
];

#[rustfmt::skip]
pub const TIME_UNITS: &[(&str, &str)] = &[
    ("janeiro", "jan"), ("fevereiro", "fev"), ("março", "mar"), ("abril", "abr"),
    ("maio", "mai"), ("junho", "jun"), ("julho", "jul"), ("agosto", "ago"),
    ("setembro", "set"), ("outubro", "out"), ("novembro", "nov"),
    ("dezembro", "dez"), ("january", "jan"), ("february", "feb"),
    ("march", "mar"), ("april", "apr"), ("june", "jun"), ("july", "jul"),
    ("august", "aug"), ("september", "sep"), ("october", "oct"),
    ("november", "nov"), ("december", "dec"), ("segunda-feira", "seg"),
    ("terça-feira", "ter"), ("quarta-feira", "qua"), ("quinta-feira", "qui"),
    ("sexta-feira", "sex"), ("sábado", "sab"), ("domingo", "dom"),
    ("monday", "mon"), ("tuesday", "tue"), ("wednesday", "wed"),
    ("thursday", "thu"), ("friday", "fri"), ("saturday", "sat"), ("sunday", "sun"),
];

#[rustfmt::skip]
pub const ORGANIZATIONS: &[(&str, &str)] = &[
    ("universidade", "univ"), ("university", "univ"), ("faculdade", "fac"),
    ("empresa", "emp"), ("company", "co"), ("corporação", "corp"),
    ("corporation", "corp"), ("organização", "org"), ("organization", "org"),
    ("associação", "assoc"), ("association", "assoc"), ("fundação", "fund"),
    ("foundation", "found"), ("instituto", "inst"), ("institute", "inst"),
    ("departamento", "dept"), ("department", "dept"),
];

#[rustfmt::skip]
pub const TITLES: &[(&str, &str)] = &[
    ("senhor", "sr"), ("senhora", "sra"), ("doutor", "dr"), ("doutora", "dra"),
    ("professor", "prof"), ("professora", "profa"), ("engenheiro", "eng"),
    ("engenheira", "enga"), ("arquiteto", "arq"), ("arquiteta", "arqa"),
    ("mister", "mr"), ("misses", "mrs"), ("doctor", "dr"), ("engineer", "eng"),
    ("architect", "arch"),
];

#[rustfmt::skip]
pub const BUSINESS: &[(&str, &str)] = &[
    ("desenvolvimento", "dev"), ("development", "dev"), ("aplicação", "app"),
    ("application", "app"), ("sistema", "sys"), ("system", "sys"),
    ("administração", "admin"), ("administration", "admin"),
    ("configuração", "config"), ("configuration", "config"),
    ("informação", "info"), ("information", "info"), ("documentação", "doc"),
    ("documentation", "doc"), ("especificação", "spec"),
    ("specification", "spec"), ("implementação", "impl"),
    ("implementation", "impl"), ("tecnologia", "tech"), ("technology", "tech"),
    ("avançada", "adv"), ("advanced", "adv"), ("moderno", "mod"),
    ("moderna", "mod"), ("modern", "mod"), ("software", "sw"),
    ("programa", "prog"), ("program", "prog"),
];

#[rustfmt::skip]
pub const DIRECTIONS: &[(&str, &str)] = &[
    ("norte", "N"), ("sul", "S"), ("leste", "L"), ("oeste", "O"),
    ("nordeste", "NE"), ("noroeste", "NO"), ("sudeste", "SE"), ("sudoeste", "SO"),
    ("north", "N"), ("south", "S"), ("east", "E"), ("west", "W"),
    ("northeast", "NE"), ("northwest", "NW"), ("southeast", "SE"),
    ("southwest", "SW"),
];

pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    MEASUREMENTS
        .iter()
        .chain(TIME_UNITS)
        .chain(ORGANIZATIONS)
        .chain(TITLES)
        .chain(BUSINESS)
        .chain(DIRECTIONS)
        .copied()
}
