use crate::table::{Entry, Table};

use super::{Locale, STANDARD_LEN, standard_entries};

// Seconds are not counted in French; anything under a minute reads the same.
const PAST: [Entry; STANDARD_LEN] = standard_entries([
    "il y a environ une seconde",
    "il y a moins d'une minute",
    "il y a environ une minute",
    "il y a %d minutes",
    "il y a environ une heure",
    "il y a %d heures",
    "il y a un jour",
    "il y a %d jours",
    "il y a un mois",
    "il y a %d mois",
    "il y a un an",
    "il y a %d ans",
]);

const FUTURE: [Entry; STANDARD_LEN] = standard_entries([
    "dans environ une seconde",
    "dans moins d'une minute",
    "dans environ une minute",
    "dans %d minutes",
    "dans environ une heure",
    "dans %d heures",
    "dans un jour",
    "dans %d jours",
    "dans un mois",
    "dans %d mois",
    "dans un an",
    "dans %d ans",
]);

pub static FRENCH: Locale = Locale::new("French", "fr", Table::new(&PAST), Table::new(&FUTURE));
