//! Networking: the tracking beacon is the page's only outbound request.

pub mod beacon;
