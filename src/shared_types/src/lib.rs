//! TypeScript bindings for the panel core are generated by `build.rs`
//! into `generated/typescript`.
