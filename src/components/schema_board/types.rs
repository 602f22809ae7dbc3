//! Injected schema payload and the built-in fallback schema.

use serde::Deserialize;

/// Payload for the optional `<script type="application/json" id="schema-data">`
/// element. Lets a host page supply its own schema without rebuilding.
#[derive(Clone, Debug, Deserialize)]
pub struct SchemaSource {
	/// Full schema text; split on newlines for display.
	pub schema: String,
}

/// Built-in travel-booking schema shown when no payload is injected.
///
/// Leading and trailing newlines are intentional; every segment between
/// newlines becomes a displayed (and clickable) line, blank ones included.
pub const DEFAULT_SCHEMA: &str = r"
type Query {
  packages: [Package!]!
  package(packageId: ID!): Package
  activities: [Activity!]!
  activity(activityId: ID!): Activity
  hotels: [Hotel!]!
  hotel(hotelId: ID!): Hotel
}

type Package {
  id: ID!
  name: String!
  activities: [Activity!]!
  price: Int
  hasActivity(id: ID!): Boolean!
  calculateSavings(id: ID!): Int
}


type Activity {
  id: ID!
  name: String!
  Schedule: String
  category: ActivityCategory!
  price: Int
}

type Hotel {
  id: ID!
  name: String!
  packages: [Package!]!
}

enum ActivityCategory {
  LEISURE
  ADVENTURE
  CULTURE
}
";
