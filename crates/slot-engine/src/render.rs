//! Render free slots as one English sentence.

use crate::time::Slot;

/// Sentence returned when nothing is free.
pub const NO_SLOTS_MESSAGE: &str = "There are no available time slots.";

const SLOTS_PREFIX: &str = "These are the available time slots";

/// Render the availability sentence.
///
/// - none: `There are no available time slots.`
/// - one: `These are the available time slots 9am to 9:30am.`
/// - many: `These are the available time slots 9am to 9:30am, 10am to 10:30am, and 5:30pm to 6pm.`
pub fn render_message(free: &[Slot]) -> String {
    if free.is_empty() {
        return NO_SLOTS_MESSAGE.to_string();
    }
    let items: Vec<String> = free.iter().map(Slot::to_string).collect();
    format!("{SLOTS_PREFIX} {}.", join_list(items.as_slice()))
}

/// Join items as an English list: `a`, `a and b`, `a, b, and c`.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    match items.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_list_grammar() {
        assert_eq!(join_list::<&str>(&[]), "");
        assert_eq!(join_list(&["a"]), "a");
        assert_eq!(join_list(&["a", "b"]), "a and b");
        assert_eq!(join_list(&["a", "b", "c"]), "a, b, and c");
        assert_eq!(join_list(&["a", "b", "c", "d"]), "a, b, c, and d");
    }
}
