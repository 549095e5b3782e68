//! Request and response schemas, one module per endpoint family.

mod activity;
mod address;
mod address_book;
mod enums;
pub mod envelope;
mod geocoding;
mod member;
mod note;
mod optimization;
mod order;
mod route;
mod territory;
mod tracking;
mod vehicle;

pub use activity::{Activity, ActivityParameters};
pub use address::{Address, AddressParameters};
pub use address_book::{AddressBookContact, AddressBookParameters};
pub use enums::{
    AlgorithmType, DeviceType, DistanceUnit, OptimizationState, Optimize, RoutePathOutput,
    TerritoryType, TravelMode,
};
pub use envelope::{Page, SearchLocationsResponse};
pub use geocoding::{GeocodingParameters, StreetRecord};
pub use member::{
    MemberConfigurationData, MemberConfigurationDataResponse, MemberConfigurationParameters,
    MemberConfigurationResponse, MemberParameters, MemberParametersV4, MemberResponse,
    MemberResponseV4,
};
pub use note::{AddressNote, CustomNoteType, NoteParameters, DEFAULT_NOTE_TYPE};
pub use order::{Order, OrderParameters};
pub use optimization::{
    DataObject, HybridDepotParameters, HybridOptimizationParameters, OptimizationParameters,
};
pub use route::{
    DataObjectRoute, Links, MergeRoutesQuery, ResequenceReoptimizeQuery, RouteParameters,
    RouteParametersQuery,
};
pub use territory::{
    AvoidanceZone, AvoidanceZoneParameters, AvoidanceZoneQuery, Territory, TerritoryQuery,
    TerritoryZone,
};
pub use tracking::{AssetArrival, AssetLocation, FindAssetResponse, GpsParameters, TrackingHistory};
pub use vehicle::{VehicleParameters, VehicleV4Parameters, VehicleV4Response, VehiclesPaginated};

pub(crate) use note::NewCustomNoteType;
pub(crate) use optimization::ProblemBody;
