mod ap_config;
mod scanner;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to the panel that owns them
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Scanner(event) => scanner::handle(event, &mut model.scanner),
        Event::ApConfig(event) => ap_config::handle(event, &mut model.ap_config),
    }
}
