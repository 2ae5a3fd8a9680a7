// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation workflow for the Motarjem screen.
//!
//! [`Session`] is the screen's single mutable record and its state machine
//! (`Idle -> Loading -> {Success, Empty, Error} -> Idle`). It performs no I/O.
//! [`TranslationController`] pairs a session with a
//! [`TranslationService`](motarjem_translate::TranslationService) and runs one
//! request per submission.
//!
//! Overlapping submissions follow a cancel-on-new-submit policy: every
//! accepted submission gets a [`Ticket`], and only the completion carrying the
//! current ticket is applied.

pub mod clipboard;
pub mod controller;
pub mod error;
pub mod mode;
pub mod session;

pub use clipboard::{Clipboard, Osc52Clipboard};
pub use controller::{fetch_reply, TranslationController};
pub use error::{ClipboardError, WorkflowError};
pub use mode::{ScreenMode, ThemeMode};
pub use session::{Outcome, PendingRequest, Reply, Session, SessionState, Submission, Ticket};
