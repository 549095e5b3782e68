//! Walks a route through its life: optimize, resequence, extend, delete.
//!
//! This example shows how to:
//! - Create a client from an API key
//! - Submit an optimization problem and read the resulting route
//! - Re-optimize the route and add destinations to it
//! - Clean up the route and the optimization problem
//!
//! Run with: `ROUTE4ME_API_KEY=... cargo run --example route_lifecycle`

use route4me::types::{
    Address, AlgorithmType, OptimizationParameters, Optimize, ResequenceReoptimizeQuery,
    RouteParameters, TravelMode,
};
use route4me::{Client, Error};

/// The key of the public Route4Me sandbox account.
const DEMO_API_KEY: &str = "11111111111111111111111111111111";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("route4me=debug,route_lifecycle=info")
        .init();

    let api_key = std::env::var("ROUTE4ME_API_KEY").unwrap_or_else(|_| DEMO_API_KEY.to_string());
    let client = Client::new(api_key)?;

    println!("=== Optimization ===");
    let problem = OptimizationParameters {
        addresses: Some(vec![
            Address {
                is_depot: Some(true),
                ..Address::new("754 5th Ave New York, NY 10019", 40.7636197, -73.9744388)
            },
            Address::new("717 5th Ave New York, NY 10022", 40.7669692, -73.9693864),
            Address::new("888 Madison Ave New York, NY 10014", 40.7715154, -73.9669241),
            Address::new("1011 Madison Ave New York, NY 10075", 40.7772129, -73.9669),
        ]),
        parameters: Some(RouteParameters {
            algorithm_type: Some(AlgorithmType::Tsp),
            route_name: Some("Single Driver Round Trip".to_string()),
            optimize: Some(Optimize::Distance),
            travel_mode: Some(TravelMode::Driving),
            rt: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };
    let solved = client.run_optimization(&problem).await?;
    println!("Problem: {}", solved.optimization_problem_id);
    println!("State: {:?}", solved.state);

    let Some(route) = solved.routes.first() else {
        println!("The optimization produced no route");
        return Ok(());
    };
    let route_id = route.route_id.clone();
    println!("Route: {}", route_id);
    println!();

    println!("=== Resequence ===");
    client
        .resequence_reoptimize_route(&ResequenceReoptimizeQuery {
            route_id: route_id.clone(),
            disable_optimization: false,
            optimize: Some(Optimize::Time),
        })
        .await?;
    println!("Route re-optimized for time");
    println!();

    println!("=== Add Destinations ===");
    let added = client
        .add_route_destinations(
            &route_id,
            &[Address::new("230 Park Ave New York, NY 10169", 40.7547272, -73.9761811)],
            true,
        )
        .await?;
    for address in &added {
        println!(
            "Added {} as destination {:?}",
            address.address_string, address.route_destination_id
        );
    }
    println!();

    println!("=== Error Handling ===");
    match client.get_route_id("0000000000000000000000000000000").await {
        Ok(id) => println!("Unexpected route: {}", id),
        Err(e) if e.is_rejection() => println!("Rejected: {}", e),
        Err(e) => println!("Failed: {}", e),
    }
    println!();

    println!("=== Cleanup ===");
    let deleted = client.delete_routes(&[route_id]).await?;
    println!("Deleted routes: {:?}", deleted);
    client
        .remove_optimization(&[solved.optimization_problem_id])
        .await?;
    println!("Optimization removed");

    Ok(())
}
