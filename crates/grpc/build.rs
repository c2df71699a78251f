//! Generates the `DiscountProtoService` server from the hand-written prost messages.

fn main() {
    let discount_service = tonic_build::manual::Service::builder()
        .name("DiscountProtoService")
        .package("discount")
        .method(
            tonic_build::manual::Method::builder()
                .name("get_discount")
                .route_name("GetDiscount")
                .input_type("crate::proto::GetDiscountRequest")
                .output_type("crate::proto::CouponModel")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new()
        .build_client(false)
        .compile(&[discount_service]);

    println!("cargo:rerun-if-changed=build.rs");
}
