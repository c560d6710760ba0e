//! The connector script: operation dispatch and pass-through.
//!
//! # Data Flow
//! ```text
//! ExecutionContext (operation id, request, cancel, forward)
//!     → Operation::parse       (exact match against the fixed set)
//!     → named handler          (recognized id)
//!     → default pass-through   (anything else, empty id included)
//!     → ctx.forward()          (backend response, returned unchanged)
//! ```
//!
//! # Design Decisions
//! - Stateless: nothing persists between invocations
//! - Every handler forwards verbatim today; the named handlers exist as the
//!   insertion points for future per-operation logic
//! - Failures come from the forwarding capability and propagate untranslated

use axum::body::Body;
use axum::http::Response;

use crate::connector::context::ExecutionContext;
use crate::connector::forward::ForwardError;
use crate::connector::operations::Operation;

/// The custom-code script for the Apify connector.
///
/// Holds no state: each invocation works entirely off its
/// [`ExecutionContext`], so concurrent calls share nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Script;

impl Script {
    /// Create the script.
    pub fn new() -> Self {
        Self
    }

    /// Called once when the host constructs the script.
    ///
    /// Intentionally empty. Must stay idempotent and side-effect-free until
    /// shared setup (for example a client reused across calls) actually
    /// exists.
    pub fn on_init(&self) {}

    /// Entry point for every invocation: dispatch on the operation id and
    /// return the backend response unchanged.
    pub async fn execute(&self, ctx: ExecutionContext) -> Result<Response<Body>, ForwardError> {
        let operation = Operation::parse(ctx.operation_id());
        tracing::debug!(
            operation = %ctx.operation_id(),
            recognized = operation.is_some(),
            method = %ctx.request().method(),
            path = %ctx.request().uri().path(),
            "Executing operation"
        );

        match operation {
            Some(Operation::RunActor) => self.run_actor(ctx).await,
            Some(Operation::RunTask) => self.run_task(ctx).await,
            Some(Operation::GetDatasetItems) => self.get_dataset_items(ctx).await,
            Some(Operation::GetKeyValueStoreRecord) => self.get_key_value_store_record(ctx).await,
            Some(Operation::ScrapeSingleUrl) => self.scrape_single_url(ctx).await,
            None => self.pass_through(ctx).await,
        }
    }

    /// `RunActor`: custom handling goes here; forwards unchanged for now.
    async fn run_actor(&self, ctx: ExecutionContext) -> Result<Response<Body>, ForwardError> {
        self.pass_through(ctx).await
    }

    /// `RunTask`: custom handling goes here; forwards unchanged for now.
    async fn run_task(&self, ctx: ExecutionContext) -> Result<Response<Body>, ForwardError> {
        self.pass_through(ctx).await
    }

    /// `GetDatasetItems`: custom handling goes here; forwards unchanged for now.
    async fn get_dataset_items(&self, ctx: ExecutionContext) -> Result<Response<Body>, ForwardError> {
        self.pass_through(ctx).await
    }

    /// `GetKeyValueStoreRecord`: custom handling goes here; forwards unchanged for now.
    async fn get_key_value_store_record(
        &self,
        ctx: ExecutionContext,
    ) -> Result<Response<Body>, ForwardError> {
        self.pass_through(ctx).await
    }

    /// `ScrapeSingleUrl`: custom handling goes here; forwards unchanged for now.
    async fn scrape_single_url(&self, ctx: ExecutionContext) -> Result<Response<Body>, ForwardError> {
        self.pass_through(ctx).await
    }

    /// Shared pass-through: send the request to the backend as-is and hand
    /// the response back as-is.
    async fn pass_through(&self, ctx: ExecutionContext) -> Result<Response<Body>, ForwardError> {
        ctx.forward().await
    }
}
