//! Log resolvers: recent log query and live log subscription

use async_graphql::{Context, Object, Result, Subscription};
use futures_core::Stream;
use tokio::sync::broadcast::error::RecvError;

use super::types::LogEntry;
use crate::core::LogBuffer;

#[derive(Default)]
pub struct LogQuery;

#[Object]
impl LogQuery {
    /// Most recent log records, oldest first.
    async fn logs(&self, ctx: &Context<'_>, limit: Option<i32>) -> Result<Vec<LogEntry>> {
        let buffer = ctx.data::<LogBuffer>()?;
        let limit = limit.map(|l| l.max(0) as usize);
        Ok(buffer.recent(limit).into_iter().map(LogEntry::from).collect())
    }
}

#[derive(Default)]
pub struct LogSubscription;

#[Subscription]
impl LogSubscription {
    /// Every log record emitted after subscribing.
    async fn log_added(&self, ctx: &Context<'_>) -> Result<impl Stream<Item = LogEntry>> {
        let mut rx = ctx.data::<LogBuffer>()?.subscribe();

        Ok(async_stream::stream! {
            loop {
                match rx.recv().await {
                    Ok(record) => yield LogEntry::from(record),
                    // Logging here would feed back into this channel
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}
