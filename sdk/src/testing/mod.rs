//! Testing utilities for code built on the Workflow API client.
//!
//! [`StubEngine`] serves canned answers over real HTTP so the whole client
//! stack (auth headers, query rendering, error mapping, hooks) runs in tests
//! without an engine.

mod stub_engine;

pub use stub_engine::{RecordedRequest, StubEngine, StubResponse};
