//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
    /// All key/value pairs of a section, sorted by key. Empty if absent.
    fn entries(&self, section: &str) -> Vec<(String, String)>;
}
