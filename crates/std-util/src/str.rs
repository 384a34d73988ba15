use heck::ToSnakeCase;

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Pluralizes the last `_`-separated word of a snake case identifier.
pub fn pluralize(src: &str) -> String {
    match src.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
        None => pluralizer::pluralize(src, 2, false),
    }
}
