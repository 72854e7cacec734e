use nimbus_core::{paginated, shape};

use crate::enums::{InstanceType, OfferingClassType, OfferingTypeValues, RIProductDescription, Tenancy};
use crate::types::{Filter, ReservedInstancesOffering};

shape! {
    pub struct DescribeReservedInstancesOfferingsRequest => DescribeReservedInstancesOfferingsRequestBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        list filters, set_filters, extend_filters: Filter => "Filters";
        copy include_marketplace, set_include_marketplace: bool => "IncludeMarketplace";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        /// Longest term to consider, in seconds.
        copy max_duration, set_max_duration: i64 => "MaxDuration";
        copy max_instance_count, set_max_instance_count: i32 => "MaxInstanceCount";
        /// Shortest term to consider, in seconds.
        copy min_duration, set_min_duration: i64 => "MinDuration";
        value offering_class, set_offering_class: OfferingClassType => "OfferingClass";
        value product_description, set_product_description: RIProductDescription => "ProductDescription";
        list reserved_instances_offering_ids, set_reserved_instances_offering_ids, extend_reserved_instances_offering_ids: String => "ReservedInstancesOfferingIds";
        copy dry_run, set_dry_run: bool => "DryRun";
        value instance_tenancy, set_instance_tenancy: Tenancy => "InstanceTenancy";
        copy max_results, set_max_results: i32 => "MaxResults";
        string next_token, set_next_token: String => "NextToken";
        value offering_type, set_offering_type: OfferingTypeValues => "OfferingType";
    }
}

shape! {
    pub struct DescribeReservedInstancesOfferingsResult => DescribeReservedInstancesOfferingsResultBuilder {
        list reserved_instances_offerings, set_reserved_instances_offerings, extend_reserved_instances_offerings: ReservedInstancesOffering => "ReservedInstancesOfferings";
        string next_token, set_next_token: String => "NextToken";
    }
}

paginated! {
    DescribeReservedInstancesOfferingsRequest => DescribeReservedInstancesOfferingsResult {
        items: reserved_instances_offerings: ReservedInstancesOffering
    }
}
