use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

use crate::models::{Activity, ActivitySet, SortMode, ViewState};

/// Collator over the CLDR root order, with punctuation kept significant.
pub fn collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// Locale-aware comparison of two strings.
///
/// Accents and case only break ties between otherwise equal letters, and
/// lowercase sorts before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collator().collate(a, b)
}

/// Entries matching the view's category and search, sorted by its mode.
///
/// The sort is stable: entries with equal keys keep the set's order.
pub fn filter_activities<'a>(
    activities: &'a ActivitySet,
    view: &ViewState,
) -> Vec<(&'a str, &'a Activity)> {
    let query = view.search.to_lowercase();
    let mut filtered: Vec<(&str, &Activity)> = activities
        .iter()
        .filter(|(_, a)| view.category.is_empty() || a.category.as_deref() == Some(view.category.as_str()))
        .filter(|(name, a)| {
            query.is_empty()
                || name.to_lowercase().contains(&query)
                || a.description.to_lowercase().contains(&query)
        })
        .collect();

    let mut coll = collator();
    match view.sort {
        SortMode::Name => filtered.sort_by(|(a, _), (b, _)| coll.collate(*a, *b)),
        SortMode::Date => filtered.sort_by(|(_, a), (_, b)| {
            coll.collate(a.date.as_deref().unwrap_or(""), b.date.as_deref().unwrap_or(""))
        }),
    }
    filtered
}

/// Distinct categories in first-seen order. Activities without one are skipped.
pub fn categories(activities: &ActivitySet) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for (_, activity) in activities.iter() {
        if let Some(cat) = activity.category.as_deref().filter(|c| !c.is_empty()) {
            if !seen.iter().any(|s| s == cat) {
                seen.push(cat.to_string());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(description: &str, category: Option<&str>, date: Option<&str>) -> Activity {
        Activity {
            description: description.to_string(),
            schedule: "Fridays".to_string(),
            category: category.map(str::to_string),
            date: date.map(str::to_string),
            max_participants: 10,
            participants: Vec::new(),
        }
    }

    fn sample() -> ActivitySet {
        [
            ("Chess Club", activity("Strategic board games", Some("Games"), Some("2024-03-01"))),
            ("Art Class", activity("Painting", Some("Arts"), Some("2024-01-15"))),
            ("basketball", activity("Team sport", Some("Sports"), None)),
            ("Drama", activity("Stage acting and ART history", Some("Arts"), Some("2024-02-10"))),
        ]
        .into_iter()
        .collect()
    }

    fn names(list: &[(&str, &Activity)]) -> Vec<String> {
        list.iter().map(|(n, _)| n.to_string()).collect()
    }

    #[test]
    fn locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("", "2024-01-01"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_cmp_places_accented_letters_with_their_base() {
        assert_eq!(locale_cmp("Éclair Club", "Football"), Ordering::Less);
        assert_eq!(locale_cmp("Café", "Cafe Z"), Ordering::Less);
        assert_eq!(locale_cmp("cafe", "café"), Ordering::Less);
        assert_eq!(locale_cmp("Ökologie", "Zumba"), Ordering::Less);
    }

    #[test]
    fn name_sort_interleaves_accented_names() {
        let set: ActivitySet = [
            ("Football", activity("", None, None)),
            ("Éclair Club", activity("Pastry", None, None)),
            ("Art", activity("", None, None)),
        ]
        .into_iter()
        .collect();
        let out = filter_activities(&set, &ViewState::default());
        assert_eq!(names(&out), ["Art", "Éclair Club", "Football"]);
    }

    #[test]
    fn default_view_sorts_everything_by_name() {
        let set = sample();
        let out = filter_activities(&set, &ViewState::default());
        assert_eq!(names(&out), ["Art Class", "basketball", "Chess Club", "Drama"]);
    }

    #[test]
    fn category_filter_is_exact() {
        let set = sample();
        let view = ViewState { category: "Arts".into(), ..ViewState::default() };
        assert_eq!(names(&filter_activities(&set, &view)), ["Art Class", "Drama"]);

        let view = ViewState { category: "arts".into(), ..ViewState::default() };
        assert!(filter_activities(&set, &view).is_empty());
    }

    #[test]
    fn search_matches_name_or_description() {
        let set: ActivitySet = [
            ("Chess Club", activity("Strategic board games", None, None)),
            ("Art Class", activity("Painting", None, None)),
        ]
        .into_iter()
        .collect();
        let view = ViewState { search: "art".into(), ..ViewState::default() };
        assert_eq!(names(&filter_activities(&set, &view)), ["Art Class"]);

        let view = ViewState { search: "BOARD".into(), ..ViewState::default() };
        assert_eq!(names(&filter_activities(&set, &view)), ["Chess Club"]);
    }

    #[test]
    fn search_and_category_combine() {
        let set = sample();
        let view = ViewState { category: "Arts".into(), search: "history".into(), sort: SortMode::Name };
        assert_eq!(names(&filter_activities(&set, &view)), ["Drama"]);
    }

    #[test]
    fn date_sort_puts_missing_dates_first() {
        let set = sample();
        let view = ViewState { sort: SortMode::Date, ..ViewState::default() };
        assert_eq!(
            names(&filter_activities(&set, &view)),
            ["basketball", "Art Class", "Drama", "Chess Club"]
        );
    }

    #[test]
    fn equal_keys_keep_set_order() {
        let set: ActivitySet = [
            ("Zeta", activity("", None, Some("2024-05-05"))),
            ("Alpha", activity("", None, Some("2024-05-05"))),
            ("Mid", activity("", None, None)),
            ("Beta", activity("", None, None)),
        ]
        .into_iter()
        .collect();
        let view = ViewState { sort: SortMode::Date, ..ViewState::default() };
        assert_eq!(names(&filter_activities(&set, &view)), ["Mid", "Beta", "Zeta", "Alpha"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let set = sample();
        let view = ViewState { category: String::new(), search: "a".into(), sort: SortMode::Date };
        let first = names(&filter_activities(&set, &view));
        let second = names(&filter_activities(&set, &view));
        assert_eq!(first, second);
    }

    #[test]
    fn categories_skip_missing_and_dedupe() {
        let set: ActivitySet = [
            ("A", activity("", Some("Sports"), None)),
            ("B", activity("", Some("Arts"), None)),
            ("C", activity("", None, None)),
            ("D", activity("", Some("Sports"), None)),
        ]
        .into_iter()
        .collect();
        assert_eq!(categories(&set), ["Sports", "Arts"]);
    }
}
