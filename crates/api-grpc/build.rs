//! Generates the ContentService server and client stubs.
//!
//! Messages are declared by hand in `src/proto.rs` with `prost::Message`
//! derives, so only the service plumbing is generated and no `protoc` is needed.

fn main() {
    let put = tonic_build::manual::Method::builder()
        .name("put")
        .route_name("Put")
        .input_type("crate::proto::PutRequest")
        .output_type("crate::proto::PutResponse")
        .codec_path("tonic::codec::ProstCodec")
        .build();

    let service = tonic_build::manual::Service::builder()
        .name("ContentService")
        .package("contentservice")
        .method(put)
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
}
