//! The module contains functions and a trait that simplify reading and writing the
//! [`Value`] objects that make up a search configuration file.
use crate::error::DoubletError;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;

/// Reads the contents of the JSON in the file named by `file_name`.
///
/// # Arguments
///
/// * `file_name` - The string slice containing the path to the file in the file system.
///
/// # Errors
///
/// The function may return [`DoubletError::IO`] if the file cannot be opened, or
/// [`DoubletError::JSON`] if the `serde_json` parser rejects the contents.
pub fn load_json_from_file_with_name(file_name: &str) -> Result<Value, DoubletError> {
    let file = File::open(file_name)?;
    let reader = BufReader::new(file);
    let v = serde_json::from_reader(reader)?;
    Ok(v)
}

/// Add a '/' character as a prefix to a key so the key can be used with
/// [`Value::pointer`] and [`Value::pointer_mut`].
fn json_path(key: &str) -> String {
    let mut jp = String::from("/");
    jp += key;
    jp
}

/// Trait for use with the [`Value`] type that adds keyed access to the members of a JSON
/// dictionary/map object.
pub trait JSONAccess {
    fn contains_key(&self, key: &str) -> bool;
    fn get_str_for_key(&self, key: &str) -> Option<&str>;
    fn set_str_for_key(&mut self, key: &str, value: &str);
    fn get_bool_for_key(&self, key: &str) -> Option<bool>;
    fn get_int_for_key(&self, key: &str) -> Option<i64>;
    fn set_node_for_key(&mut self, key: &str, node: Value);
}

impl JSONAccess for Value {
    /// Return true if the JSON object is an object and it has a key/value pair
    /// for `key`.
    fn contains_key(&self, key: &str) -> bool {
        self.is_object() && self.pointer(&json_path(key)).is_some()
    }

    /// Return the string stored for `key`, or `None` if the object has no value for `key` or the
    /// value is not a string.
    fn get_str_for_key(&self, key: &str) -> Option<&str> {
        self.pointer(&json_path(key)).and_then(|v| v.as_str())
    }

    /// Add or update the string stored for `key`.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    /// * `value` - The string slice referencing the text comprising the value.
    fn set_str_for_key(&mut self, key: &str, value: &str) {
        self.set_node_for_key(key, Value::from(value));
    }

    fn get_bool_for_key(&self, key: &str) -> Option<bool> {
        self.pointer(&json_path(key)).and_then(|v| v.as_bool())
    }

    fn get_int_for_key(&self, key: &str) -> Option<i64> {
        self.pointer(&json_path(key)).and_then(|v| v.as_i64())
    }

    /// Assuming the [`Value`] object represents a JSON dictionary/map object, then
    /// the function will store the value in `node` for `key` in the dictionary/map object.
    ///
    /// # Arguments
    ///
    /// * `key` - The string slice referencing the text comprising the key.
    /// * `node` - The [`Value`] object to use as the new value for `key`.
    fn set_node_for_key(&mut self, key: &str, node: Value) {
        if let Some(v) = self.pointer_mut(&json_path(key)) {
            *v = node;
        } else if let Some(node_map) = self.as_object_mut() {
            // The node does not have an existing value for `key`.
            node_map.insert(String::from(key), node);
        }
    }
}
