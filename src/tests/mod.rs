// Store behavior against the persistence layer
mod common;
