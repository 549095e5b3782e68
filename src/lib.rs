//! # route4me - A client for the Route4Me route optimization API
//!
//! `route4me` wraps the Route4Me HTTP/JSON API on top of `reqwest`. It
//! covers route optimization, routes and their destinations, notes, GPS
//! tracking, members, the address book, avoidance zones and territories,
//! orders, geocoding, and vehicles.
//!
//! ## Quick Start
//!
//! ```no_run
//! use route4me::{Client, types::*};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), route4me::Error> {
//!     let client = Client::new("11111111111111111111111111111111")?;
//!
//!     let problem = OptimizationParameters {
//!         addresses: Some(vec![
//!             Address {
//!                 is_depot: Some(true),
//!                 ..Address::new("151 Arbor Way Milledgeville GA 31061", 33.132675, -83.244743)
//!             },
//!             Address::new("230 Arbor Way Milledgeville GA 31061", 33.129695, -83.24437),
//!             Address::new("148 Bass Rd NE Milledgeville GA 31061", 33.143526, -83.240354),
//!         ]),
//!         parameters: Some(RouteParameters {
//!             algorithm_type: Some(AlgorithmType::Tsp),
//!             route_name: Some("Single Driver Route 10 Stops".to_string()),
//!             optimize: Some(Optimize::Distance),
//!             distance_unit: Some(DistanceUnit::Miles),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     };
//!
//!     let solved = client.run_optimization(&problem).await?;
//!     for route in &solved.routes {
//!         println!("Route {} has {} stops", route.route_id, route.addresses.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result`]. Service error envelopes, unstructured
//! failure bodies, and `{"status": false}` answers to successful requests
//! map onto distinct [`Error`] variants, and the raw body stays available:
//!
//! ```no_run
//! use route4me::{Client, Error, types::RouteParametersQuery};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("11111111111111111111111111111111")?;
//! let query = RouteParametersQuery {
//!     route_id: Some("C896D0B9E6B3E6666EE58A7C7A4C0AAC".to_string()),
//!     ..Default::default()
//! };
//! match client.get_route(&query).await {
//!     Ok(route) => println!("Route has {} stops", route.addresses.len()),
//!     Err(Error::Api { status, errors }) => {
//!         eprintln!("Service refused the request ({}): {}", status, errors.join("; "));
//!     }
//!     Err(Error::HttpError { status, raw_response, .. }) => {
//!         eprintln!("HTTP error {}: {}", status, raw_response);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Raw Calls
//!
//! Endpoints without a dedicated method can be called through the generic
//! invoker:
//!
//! ```no_run
//! use route4me::{ApiRequest, Client};
//!
//! # async fn example() -> Result<(), route4me::Error> {
//! # let client = Client::new("11111111111111111111111111111111")?;
//! let request = ApiRequest::get("/api.v4/route.php").with_query_param("limit", 5);
//! let response = client.call::<serde_json::Value>(request).await?;
//! println!("{} in {:?}", response.status, response.latency);
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
pub mod endpoints;
mod error;
pub mod field;
mod query;
pub mod request;
mod response;
pub mod types;

pub use client::{Client, ClientBuilder, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use field::Field;
pub use request::{ApiRequest, JsonPolicy, MultipartForm, RequestBody};
pub use response::Response;
