//! GraphQL documents

use crate::types::FetchOptions;

use super::GraphQlRequest;
use super::types::StatusGroupsVariables;

/// Edge status distribution for one zone, largest groups first.
pub(crate) const STATUS_GROUPS_QUERY: &str = "query StatusGroups($zoneTag: string!, $limit: uint64!, $start: Time!, $end: Time!) { \
viewer { zones(filter: {zoneTag: $zoneTag}) { \
httpRequestsAdaptiveGroups(limit: $limit, filter: {datetime_geq: $start, datetime_leq: $end}, orderBy: [count_DESC]) { \
count dimensions { edgeResponseStatus } } } } }";

/// Builds the status distribution request. Values go into `variables`
/// untouched; serialization handles quoting.
pub(crate) fn status_groups_request(options: &FetchOptions) -> GraphQlRequest<'_> {
    GraphQlRequest {
        query: STATUS_GROUPS_QUERY,
        variables: StatusGroupsVariables {
            zone_tag: &options.zone_id,
            limit: options.limit,
            start: &options.start_date,
            end: &options.end_date,
        },
    }
}
