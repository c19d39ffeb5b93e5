use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_panel_core::{
    events::{ApConfigEvent, ScannerEvent},
    types::{ActionOutcome, ActionState, ApConfigPhase, MessageKind, StationState},
    App,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Register every enum explicitly so all variants are traced
    gen.register_type::<ScannerEvent>()?;
    gen.register_type::<ApConfigEvent>()?;

    gen.register_type::<StationState>()?;
    gen.register_type::<MessageKind>()?;
    gen.register_type::<ActionState>()?;
    gen.register_type::<ActionOutcome>()?;
    gen.register_type::<ApConfigPhase>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
