use chrono::{DateTime, Utc};
use nimbus_core::shape;

shape! {
    /// An Elastic Graphics accelerator attached to an instance.
    pub struct ElasticGpuAssociation => ElasticGpuAssociationBuilder {
        string elastic_gpu_id, set_elastic_gpu_id: String => "ElasticGpuId";
        string elastic_gpu_association_id, set_elastic_gpu_association_id: String => "ElasticGpuAssociationId";
        string elastic_gpu_association_state, set_elastic_gpu_association_state: String => "ElasticGpuAssociationState";
        /// ISO 8601 text as returned by the service.
        string elastic_gpu_association_time, set_elastic_gpu_association_time: String => "ElasticGpuAssociationTime";
    }
}

shape! {
    pub struct ElasticInferenceAcceleratorAssociation => ElasticInferenceAcceleratorAssociationBuilder {
        string elastic_inference_accelerator_arn, set_elastic_inference_accelerator_arn: String => "ElasticInferenceAcceleratorArn";
        string elastic_inference_accelerator_association_id, set_elastic_inference_accelerator_association_id: String => "ElasticInferenceAcceleratorAssociationId";
        string elastic_inference_accelerator_association_state, set_elastic_inference_accelerator_association_state: String => "ElasticInferenceAcceleratorAssociationState";
        copy elastic_inference_accelerator_association_time, set_elastic_inference_accelerator_association_time: DateTime<Utc> => "ElasticInferenceAcceleratorAssociationTime";
    }
}

shape! {
    /// Graphics accelerator to attach at launch (for example `eg1.medium`).
    pub struct ElasticGpuSpecification => ElasticGpuSpecificationBuilder {
        string type_, set_type: String => "Type";
    }
}

shape! {
    pub struct ElasticGpuSpecificationResponse => ElasticGpuSpecificationResponseBuilder {
        string type_, set_type: String => "Type";
    }
}

shape! {
    /// Inference accelerator to attach at launch.
    pub struct ElasticInferenceAccelerator => ElasticInferenceAcceleratorBuilder {
        string type_, set_type: String => "Type";
        copy count, set_count: i32 => "Count";
    }
}
