//! Shared empty-state policy for UI layers.
//!
//! A collection that has not loaded yet (`None`) counts as empty, but the
//! placeholder must never be shown while a load is still in flight,
//! otherwise the user sees a flash of "no content" before real data
//! arrives.

pub fn is_empty<T>(data: Option<&[T]>) -> bool {
    data.map_or(true, |items| items.is_empty())
}

pub fn has_data<T>(data: Option<&[T]>) -> bool {
    !is_empty(data)
}

pub fn get_count<T>(data: Option<&[T]>) -> usize {
    data.map_or(0, |items| items.len())
}

/// True iff the load has finished and there is nothing to show.
pub fn should_show_empty_state<T>(data: Option<&[T]>, is_loading: bool) -> bool {
    !is_loading && is_empty(data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStateMessage {
    pub title: &'static str,
    pub description: &'static str,
}

/// Placeholder copy for a named section of the site.
pub fn empty_state_message(context: &str) -> EmptyStateMessage {
    match context {
        "projects" => EmptyStateMessage {
            title: "No Projects Yet",
            description: "New case studies and projects will appear here soon.",
        },
        "testimonials" => EmptyStateMessage {
            title: "No Testimonials Yet",
            description: "Client feedback and testimonials will be showcased here.",
        },
        "mentorship" => EmptyStateMessage {
            title: "No Mentorship Sessions",
            description: "Mentorship opportunities will be available soon.",
        },
        "case-studies" => EmptyStateMessage {
            title: "Coming Soon",
            description: "Detailed case studies are currently being prepared.",
        },
        "search" => EmptyStateMessage {
            title: "No Results Found",
            description: "Try adjusting your search criteria or browse all items.",
        },
        _ => EmptyStateMessage {
            title: "Coming Soon",
            description: "This section is currently being crafted. Check back soon for updates.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty_treats_missing_as_empty() {
        assert!(is_empty::<u32>(None));
        assert!(is_empty::<u32>(Some(&[])));
        assert!(!is_empty(Some(&[1])));
    }

    #[test]
    fn test_has_data_and_count() {
        assert!(!has_data::<u32>(None));
        assert!(has_data(Some(&[1, 2])));
        assert_eq!(get_count::<u32>(None), 0);
        assert_eq!(get_count(Some(&[1, 2, 3])), 3);
    }

    #[test]
    fn test_should_show_empty_state_truth_table() {
        // Still loading: never show the placeholder, even with no data.
        assert!(!should_show_empty_state::<u32>(Some(&[]), true));
        assert!(!should_show_empty_state::<u32>(None, true));

        // Load finished with nothing: show it.
        assert!(should_show_empty_state::<u32>(Some(&[]), false));
        assert!(should_show_empty_state::<u32>(None, false));

        // Load finished with data: show the data instead.
        assert!(!should_show_empty_state(Some(&[1]), false));
    }

    #[test]
    fn test_empty_state_message_falls_back_to_default() {
        assert_eq!(empty_state_message("projects").title, "No Projects Yet");
        assert_eq!(empty_state_message("unknown-section").title, "Coming Soon");
    }
}
