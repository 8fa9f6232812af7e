//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The only state with a real lifecycle is the session (who is logged in).
//! It lives in [`session::SessionStore`], provided via context from the
//! application root so every page reads the same record.

pub mod session;
