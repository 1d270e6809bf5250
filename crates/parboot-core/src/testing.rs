use crate::table::{Language, Param, Table};

pub(crate) fn params(symbols: &str) -> Vec<Param> {
    symbols
        .chars()
        .map(|c| c.to_string().parse().unwrap())
        .collect()
}

pub(crate) fn table(rows: &[(&str, &str)]) -> Table {
    let languages = rows
        .iter()
        .map(|&(name, symbols)| Language::new(name.to_owned(), params(symbols)))
        .collect();
    Table::new(languages).unwrap()
}

// 3 languages, 8 parameters. Pairwise Hamming distances are 2/8, 2/6 and 4/6.
pub(crate) fn three_language_table() -> Table {
    table(&[
        ("alpha", "++++----"),
        ("beta", "+++----+"),
        ("gamma", "+0-+-0+-"),
    ])
}
