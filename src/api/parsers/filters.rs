use crate::domain::PlayerFilters;

/// Treats a blank query parameter as if it had not been sent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn player_filters(
    state: Option<String>,
    city: Option<String>,
    gender: Option<String>,
    category: Option<String>,
) -> PlayerFilters {
    PlayerFilters {
        state: non_empty(state),
        city: non_empty(city),
        gender: non_empty(gender),
        category: non_empty(category),
    }
}
