//! Every task installs its own boundary.
//!
//! Run with: cargo run --example tokio_tasks --features async-tokio

use std::time::Duration;

use errless::async_ext::spawn_handled;
use errless::prelude::*;

async fn fetch_shard(shard: u32) -> WrappedResult<Vec<u32>, String> {
    tokio::time::sleep(Duration::from_millis(5 * u64::from(shard))).await;
    let failure = (shard == 2).then(|| format!("shard {shard} unreachable"));
    let rows = try1((0..shard).collect(), failure).err(errless::message!("fetching shard {shard}"))?;
    Ok(rows)
}

#[tokio::main]
async fn main() {
    let handles: Vec<_> = (0..4)
        .map(|shard| spawn_handled(fetch_shard(shard), |err| err.with_wrap("collector")))
        .collect();

    for (shard, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(Ok(rows)) => println!("shard {shard}: {} rows", rows.len()),
            Ok(Err(err)) => println!("shard {shard}: {err}"),
            Err(join) => println!("shard {shard}: task failed: {join}"),
        }
    }
}
