//! Demo form, generated from form.toml at build time

use vtform_core::config::{FieldConfig, FormConfig};
use vtform_core::TextPolicy;

include!(concat!(env!("OUT_DIR"), "/form.rs"));
