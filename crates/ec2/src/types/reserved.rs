use chrono::{DateTime, Utc};
use nimbus_core::{Float64, shape};

use super::Tag;
use crate::enums::{
    CurrencyCodeValues, InstanceType, OfferingClassType, OfferingTypeValues, RIProductDescription,
    ReservedInstanceState, Scope, Tenancy,
};

shape! {
    /// A recurring charge on a reservation.
    pub struct RecurringCharge => RecurringChargeBuilder {
        copy amount, set_amount: Float64 => "Amount";
        string frequency, set_frequency: String => "Frequency";
    }
}

shape! {
    pub struct PricingDetail => PricingDetailBuilder {
        copy count, set_count: i32 => "Count";
        copy price, set_price: Float64 => "Price";
    }
}

shape! {
    /// A reserved-instance offering available for purchase.
    pub struct ReservedInstancesOffering => ReservedInstancesOfferingBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        /// Term length in seconds.
        copy duration, set_duration: i64 => "Duration";
        copy fixed_price, set_fixed_price: Float64 => "FixedPrice";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        value product_description, set_product_description: RIProductDescription => "ProductDescription";
        string reserved_instances_offering_id, set_reserved_instances_offering_id: String => "ReservedInstancesOfferingId";
        copy usage_price, set_usage_price: Float64 => "UsagePrice";
        value currency_code, set_currency_code: CurrencyCodeValues => "CurrencyCode";
        value instance_tenancy, set_instance_tenancy: Tenancy => "InstanceTenancy";
        copy marketplace, set_marketplace: bool => "Marketplace";
        value offering_class, set_offering_class: OfferingClassType => "OfferingClass";
        value offering_type, set_offering_type: OfferingTypeValues => "OfferingType";
        list pricing_details, set_pricing_details, extend_pricing_details: PricingDetail => "PricingDetails";
        list recurring_charges, set_recurring_charges, extend_recurring_charges: RecurringCharge => "RecurringCharges";
        value scope, set_scope: Scope => "Scope";
        list tags, set_tags, extend_tags: Tag => "Tags";
    }
}

shape! {
    /// A purchased reservation.
    pub struct ReservedInstances => ReservedInstancesBuilder {
        string availability_zone, set_availability_zone: String => "AvailabilityZone";
        /// Term length in seconds.
        copy duration, set_duration: i64 => "Duration";
        copy end, set_end: DateTime<Utc> => "End";
        copy fixed_price, set_fixed_price: Float64 => "FixedPrice";
        copy instance_count, set_instance_count: i32 => "InstanceCount";
        value instance_type, set_instance_type: InstanceType => "InstanceType";
        value product_description, set_product_description: RIProductDescription => "ProductDescription";
        string reserved_instances_id, set_reserved_instances_id: String => "ReservedInstancesId";
        copy start, set_start: DateTime<Utc> => "Start";
        value state, set_state: ReservedInstanceState => "State";
        copy usage_price, set_usage_price: Float64 => "UsagePrice";
        value currency_code, set_currency_code: CurrencyCodeValues => "CurrencyCode";
        value instance_tenancy, set_instance_tenancy: Tenancy => "InstanceTenancy";
        value offering_class, set_offering_class: OfferingClassType => "OfferingClass";
        value offering_type, set_offering_type: OfferingTypeValues => "OfferingType";
        list recurring_charges, set_recurring_charges, extend_recurring_charges: RecurringCharge => "RecurringCharges";
        value scope, set_scope: Scope => "Scope";
        list tags, set_tags, extend_tags: Tag => "Tags";
    }
}
