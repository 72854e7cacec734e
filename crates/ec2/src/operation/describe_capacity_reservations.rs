use nimbus_core::{paginated, shape};

use crate::types::{CapacityReservation, Filter};

shape! {
    pub struct DescribeCapacityReservationsRequest => DescribeCapacityReservationsRequestBuilder {
        list capacity_reservation_ids, set_capacity_reservation_ids, extend_capacity_reservation_ids: String => "CapacityReservationIds";
        string next_token, set_next_token: String => "NextToken";
        copy max_results, set_max_results: i32 => "MaxResults";
        list filters, set_filters, extend_filters: Filter => "Filters";
        copy dry_run, set_dry_run: bool => "DryRun";
    }
}

shape! {
    pub struct DescribeCapacityReservationsResult => DescribeCapacityReservationsResultBuilder {
        string next_token, set_next_token: String => "NextToken";
        list capacity_reservations, set_capacity_reservations, extend_capacity_reservations: CapacityReservation => "CapacityReservations";
    }
}

paginated! {
    DescribeCapacityReservationsRequest => DescribeCapacityReservationsResult {
        items: capacity_reservations: CapacityReservation
    }
}
