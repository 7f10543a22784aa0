use crate::table::{Entry, Table};

use super::{Locale, STANDARD_LEN, standard_entries};

const PAST: [Entry; STANDARD_LEN] = standard_entries([
    "1 秒前",
    "%d 秒前",
    "1 分钟前",
    "%d 分钟前",
    "1 小时前",
    "%d 小时前",
    "1 天前",
    "%d 天前",
    "1 月前",
    "%d 月前",
    "1 年前",
    "%d 年前",
]);

const FUTURE: [Entry; STANDARD_LEN] = standard_entries([
    "1 秒后",
    "%d 秒后",
    "1 分钟后",
    "%d 分钟后",
    "1 小时后",
    "%d 小时后",
    "1 天后",
    "%d 天后",
    "1 月后",
    "%d 月后",
    "1 年后",
    "%d 年后",
]);

pub static CHINESE: Locale = Locale::new("Chinese", "zh", Table::new(&PAST), Table::new(&FUTURE));
