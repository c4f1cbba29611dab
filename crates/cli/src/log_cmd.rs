use liftplan_storage::FileKv;

use crate::logger;

pub fn show(kv: &FileKv) {
    for entry in logger::read_entries(kv) {
        println!("{}  {:<5}  {}", entry.time, entry.level, entry.message);
    }
}
