use crate::table::{Entry, Table};

use super::{Locale, STANDARD_LEN, standard_entries};

const PAST: [Entry; STANDARD_LEN] = standard_entries([
    "vor etwa einer Sekunde",
    "vor %d Sekunden",
    "vor etwa einer Minute",
    "vor %d Minuten",
    "vor etwa einer Stunde",
    "vor %d Stunden",
    "vor einem Tag",
    "vor %d Tagen",
    "vor einem Monat",
    "vor %d Monaten",
    "vor einem Jahr",
    "vor %d Jahren",
]);

const FUTURE: [Entry; STANDARD_LEN] = standard_entries([
    "in etwa einer Sekunde",
    "in %d Sekunden",
    "in etwa einer Minute",
    "in %d Minuten",
    "in etwa einer Stunde",
    "in %d Stunden",
    "in einem Tag",
    "in %d Tagen",
    "in einem Monat",
    "in %d Monaten",
    "in einem Jahr",
    "in %d Jahren",
]);

pub static GERMAN: Locale = Locale::new("German", "de", Table::new(&PAST), Table::new(&FUTURE));
