//! Organisms and plants, mapped to short English forms.

#[rustfmt::skip]
pub const DOMESTIC: &[(&str, &str)] = &[
    ("gato", "cat"), ("cachorro", "dog"), ("cão", "dog"), ("pássaro", "bird"),
    ("peixe", "fish"), ("cavalo", "horse"), ("vaca", "cow"), ("porco", "pig"),
    ("ovelha", "sheep"), ("cabra", "goat"), ("coelho", "rabbit"),
    ("hamster", "hamster"), ("rato", "rat"), ("galinha", "chicken"),
    ("pato", "duck"), ("ganso", "goose"),
];

#[rustfmt::skip]
pub const WILD: &[(&str, &str)] = &[
    ("leão", "lion"), ("tigre", "tiger"), ("elefante", "elephant"),
    ("girafa", "giraffe"), ("zebra", "zebra"), ("macaco", "monkey"),
    ("urso", "bear"), ("lobo", "wolf"), ("raposa", "fox"), ("veado", "deer"),
    ("águia", "eagle"), ("falcão", "hawk"), ("coruja", "owl"), ("cobra", "snake"),
    ("jacaré", "alligator"), ("tubarão", "shark"), ("baleia", "whale"),
    ("golfinho", "dolphin"),
];

#[rustfmt::skip]
pub const INSECTS: &[(&str, &str)] = &[
    ("abelha", "bee"), ("borboleta", "butterfly"), ("formiga", "ant"),
    ("mosca", "fly"), ("mosquito", "mosquito"), ("aranha", "spider"),
    ("barata", "cockroach"), ("grilo", "cricket"), ("libélula", "dragonfly"),
];

#[rustfmt::skip]
pub const AQUATIC: &[(&str, &str)] = &[
    ("peixe", "fish"), ("tubarão", "shark"), ("baleia", "whale"),
    ("golfinho", "dolphin"), ("polvo", "octopus"), ("lula", "squid"),
    ("caranguejo", "crab"), ("camarão", "shrimp"), ("tartaruga", "turtle"),
    ("foca", "seal"),
];

#[rustfmt::skip]
pub const PLANTS: &[(&str, &str)] = &[
    ("árvore", "tree"), ("flor", "flower"), ("rosa", "rose"), ("grama", "grass"),
    ("folha", "leaf"), ("galho", "branch"), ("raiz", "root"), ("semente", "seed"),
    ("fruto", "fruit"), ("planta", "plant"),
];

pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    DOMESTIC
        .iter()
        .chain(WILD)
        .chain(INSECTS)
        .chain(AQUATIC)
        .chain(PLANTS)
        .copied()
}
