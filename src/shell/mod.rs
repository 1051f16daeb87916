// Composition root for the votes bounded context.
//
// Responsibilities
// - Wire the configured vote store into use case handlers (state).
// - Expose the HTTP surface and its error rendering (http, error).

pub mod error;
pub mod http;
pub mod state;
