use std::time::Duration;

use rail_result::prelude_async::*;

#[derive(Debug, Clone, Copy)]
struct Resource {
    id: u32,
}

#[derive(Debug)]
enum PipelineError {
    NotFound(u32),
    Unconvertible(u32),
}

async fn fetch(id: u32) -> Outcome<Resource, PipelineError> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    if id < 10 {
        Outcome::ok(Resource { id })
    } else {
        Outcome::err(PipelineError::NotFound(id))
    }
}

async fn convert(resource: Resource) -> Outcome<String, PipelineError> {
    tokio::task::yield_now().await;
    if resource.id % 2 == 0 {
        Outcome::ok(format!("resource-{}", resource.id))
    } else {
        Outcome::err(PipelineError::Unconvertible(resource.id))
    }
}

#[tokio::main]
async fn main() {
    for id in [4, 7, 12] {
        let label = fetch(id)
            .and_then_async(convert)
            .map(|name| name.to_uppercase())
            .unwrap_or_else(|e| format!("<{e:?}>"))
            .await;
        println!("{id}: {label}");
    }
}
