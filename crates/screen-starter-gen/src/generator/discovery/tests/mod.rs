mod discovery;
mod subtype;
