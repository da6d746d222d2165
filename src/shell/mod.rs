// Composition root for the item store service.
//
// Responsibilities
// - Read config from environment.
// - Initialise logging.
// - Instantiate the in-memory store and wire it into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
pub mod telemetry;
