//! Endpoint paths, relative to the client's base URL.

/// Default base URL of the Route4Me service.
pub const DEFAULT_BASE_URL: &str = "https://www.route4me.com";

pub const OPTIMIZATION: &str = "/api.v4/optimization_problem.php";
pub const HYBRID_OPTIMIZATION: &str = "/api.v4/hybrid_date_optimization.php";
pub const HYBRID_DEPOTS: &str = "/api/change_hybrid_optimization_depot.php";

pub const ROUTE: &str = "/api.v4/route.php";
pub const DUPLICATE_ROUTE: &str = "/actions/duplicate_route.php";
pub const ROUTE_REOPTIMIZE: &str = "/api.v3/route/reoptimize_2.php";
pub const MERGE_ROUTES: &str = "/actions/merge_routes.php";
pub const ROUTE_SHARING: &str = "/actions/route/share_route.php";
pub const MOVE_ROUTE_DESTINATION: &str = "/actions/route/move_route_destination.php";

pub const ADDRESS: &str = "/api.v4/address.php";
pub const MARK_ADDRESS_VISITED: &str = "/actions/address/update_address_visited.php";
pub const MARK_ADDRESS_DEPARTED: &str = "/api/route/mark_address_departed.php";

pub const ROUTE_NOTES: &str = "/actions/addRouteNotes.php";
pub const CUSTOM_NOTE_TYPE: &str = "/api.v4/note_custom_types.php";

pub const ACTIVITY_FEED: &str = "/api.v4/activity_feed.php";

pub const SET_GPS: &str = "/track/set.php";
pub const DEVICE_LOCATION: &str = "/api/track/get_device_location.php";
pub const ASSET_TRACKING: &str = "/api.v4/status.php";

pub const USERS: &str = "/api.v4/user.php";
pub const USER_AUTHENTICATION: &str = "/actions/authenticate.php";
pub const USER_REGISTRATION: &str = "/actions/register_action.php";
pub const VALIDATE_SESSION: &str = "/datafeed/session/validate_session.php";
pub const USER_CONFIGURATION: &str = "/api.v4/configuration-settings.php";

pub const ADDRESS_BOOK: &str = "/api.v4/address_book.php";
pub const AVOIDANCE: &str = "/api.v4/avoidance.php";
pub const TERRITORY: &str = "/api.v4/territory.php";
pub const ORDER: &str = "/api.v4/order.php";

pub const GEOCODER: &str = "/api/geocoder.php";
pub const RAPID_STREET_DATA: &str = "/street_data";
pub const RAPID_STREET_ZIPCODE: &str = "/street_data/zipcode";
pub const RAPID_STREET_SERVICE: &str = "/street_data/service";

pub const VEHICLES: &str = "/api/v4/vehicles";
