pub mod error;
pub mod estimate;
pub mod format;
pub mod models;
pub mod overpass;
pub mod pace;
pub mod route_analyzer;
pub mod time_calculator;
pub mod trails;
pub mod validation;

pub use error::EstimateError;
pub use estimate::{estimate_route, RouteEstimate};
pub use format::{format_clock, format_duration, format_time_range};
pub use models::{
    ActivityType, ChauvinDifficulty, EstimationMethod, MunterTerrain, RouteData, RouteSegment,
    SafetyLevel, SafetyRecommendations, Season, SegmentTerrain, TechnicalGrade, TimeEstimate,
};
pub use overpass::{
    build_overpass_query, osm_activity_tags, process_osm_results, OverpassResponse,
    DEFAULT_OVERPASS_URL,
};
pub use pace::{PaceFactorKind, PaceFactorNotice, PaceFactors};
pub use route_analyzer::{
    analyze_route, classify_route, demo_route, estimate_scrambling_difficulty,
    parse_climbing_grade, total_time, ClimbingGrade, RouteRegime,
};
pub use time_calculator::{chauvin_system, munter_method, safety_recommendations, technical_system};
pub use trails::{
    calculate_confidence, consolidate_and_rank, fuzzy_match, RouteQuery, TrailSource,
    TrailSuggestion,
};
pub use validation::{validate_pace_factors, validate_route};
