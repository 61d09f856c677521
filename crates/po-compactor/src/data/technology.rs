//! Technology names and acronyms.

#[rustfmt::skip]
pub const LANGUAGES: &[(&str, &str)] = &[
    ("JavaScript", "JS"), ("TypeScript", "TS"), ("Python", "Py"), ("Java", "Java"),
    ("C Sharp", "C#"), ("C++", "C++"), ("PHP", "PHP"), ("Ruby", "Ruby"),
    ("Go", "Go"), ("Rust", "Rust"), ("Swift", "Swift"), ("Kotlin", "Kt"),
    ("Scala", "Scala"), ("R", "R"),
];

#[rustfmt::skip]
pub const FRAMEWORKS: &[(&str, &str)] = &[
    ("React", "React"), ("Angular", "Angular"), ("Vue.js", "Vue"),
    ("Next.js", "Next"), ("Express.js", "Express"), ("Django", "Django"),
    ("Flask", "Flask"), ("Spring Boot", "Spring"), ("Laravel", "Laravel"),
    ("Ruby on Rails", "Rails"), ("ASP.NET", "ASP"), ("Node.js", "Node"),
];

#[rustfmt::skip]
pub const DATABASES: &[(&str, &str)] = &[
    ("MySQL", "MySQL"), ("PostgreSQL", "PG"), ("MongoDB", "Mongo"),
    ("Redis", "Redis"), ("SQLite", "SQLite"), ("Oracle Database", "Oracle"),
    ("Microsoft SQL Server", "MSSQL"), ("Elasticsearch", "ES"),
    ("Cassandra", "Cassandra"),
];

#[rustfmt::skip]
pub const CLOUD: &[(&str, &str)] = &[
    ("Amazon Web Services", "AWS"), ("Microsoft Azure", "Azure"),
    ("Google Cloud Platform", "GCP"), ("Docker", "Docker"), ("Kubernetes", "K8s"),
    ("Jenkins", "Jenkins"), ("GitLab", "GitLab"), ("GitHub", "GitHub"),
    ("Terraform", "TF"), ("Ansible", "Ansible"),
];

#[rustfmt::skip]
pub const PROTOCOLS: &[(&str, &str)] = &[
    ("Application Programming Interface", "API"),
    ("Hypertext Transfer Protocol", "HTTP"), ("HTTP Secure", "HTTPS"),
    ("File Transfer Protocol", "FTP"), ("Simple Mail Transfer Protocol", "SMTP"),
    ("Transmission Control Protocol", "TCP"), ("User Datagram Protocol", "UDP"),
    ("Internet Protocol", "IP"), ("Domain Name System", "DNS"),
    ("Secure Shell", "SSH"),
];

#[rustfmt::skip]
pub const DATA_FORMATS: &[(&str, &str)] = &[
    ("JavaScript Object Notation", "JSON"), ("Extensible Markup Language", "XML"),
    ("YAML Ain't Markup Language", "YAML"), ("Comma-Separated Values", "CSV"),
    ("Portable Document Format", "PDF"), ("HyperText Markup Language", "HTML"),
    ("Cascading Style Sheets", "CSS"),
];

#[rustfmt::skip]
pub const AI_ML: &[(&str, &str)] = &[
    ("Inteligência Artificial", "IA"), ("Artificial Intelligence", "AI"),
    ("Machine Learning", "ML"), ("Deep Learning", "DL"), ("Neural Network", "NN"),
    ("Natural Language Processing", "NLP"),
    ("Processamento de Linguagem Natural", "PLN"), ("Computer Vision", "CV"),
    ("Large Language Model", "LLM"), ("Generative Pre-trained Transformer", "GPT"),
    ("Convolutional Neural Network", "CNN"), ("Recurrent Neural Network", "RNN"),
];

#[rustfmt::skip]
pub const METHODOLOGIES: &[(&str, &str)] = &[
    ("Agile", "Agile"), ("Scrum", "Scrum"), ("DevOps", "DevOps"),
    ("Continuous Integration", "CI"), ("Continuous Deployment", "CD"),
    ("Test Driven Development", "TDD"), ("Behavior Driven Development", "BDD"),
    ("Model View Controller", "MVC"), ("Model View ViewModel", "MVVM"),
    ("Representational State Transfer", "REST"), ("GraphQL", "GraphQL"),
];

/// Acronyms that must survive byte-for-byte.
#[rustfmt::skip]
pub const NEVER_COMPRESS: &[&str] = &["API", "HTTP", "HTTPS", "JSON", "XML", "SQL", "HTML", "CSS"];

pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGES
        .iter()
        .chain(FRAMEWORKS)
        .chain(DATABASES)
        .chain(CLOUD)
        .chain(PROTOCOLS)
        .chain(DATA_FORMATS)
        .chain(AI_ML)
        .chain(METHODOLOGIES)
        .copied()
}
