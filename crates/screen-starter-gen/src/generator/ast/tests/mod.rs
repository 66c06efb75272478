mod fields;
mod types;
