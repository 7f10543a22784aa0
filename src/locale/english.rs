use crate::table::{Entry, Table};

use super::{Locale, STANDARD_LEN, standard_entries};

const PAST: [Entry; STANDARD_LEN] = standard_entries([
    "about a second ago",
    "%d seconds ago",
    "about a minute ago",
    "%d minutes ago",
    "about an hour ago",
    "%d hours ago",
    "one day ago",
    "%d days ago",
    "one month ago",
    "%d months ago",
    "one year ago",
    "%d years ago",
]);

const FUTURE: [Entry; STANDARD_LEN] = standard_entries([
    "in about a second",
    "in %d seconds",
    "in about a minute",
    "in %d minutes",
    "in about an hour",
    "in %d hours",
    "in one day",
    "in %d days",
    "in one month",
    "in %d months",
    "in one year",
    "in %d years",
]);

pub static ENGLISH: Locale = Locale::new("English", "en", Table::new(&PAST), Table::new(&FUTURE));
