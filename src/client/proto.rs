//! Protobuf messages for the pachd services used by the admin commands.
//!
//! Hand-written prost types mirroring `versionpb`, `pfs` and `pps`; only
//! the fields these commands need are declared.

/// google.protobuf.Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

/// versionpb.Version
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VersionMessage {
    #[prost(uint32, tag = "1")]
    pub major: u32,
    #[prost(uint32, tag = "2")]
    pub minor: u32,
    #[prost(uint32, tag = "3")]
    pub micro: u32,
    #[prost(string, tag = "4")]
    pub additional: ::prost::alloc::string::String,
}

/// pps.GarbageCollectRequest
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GarbageCollectRequest {}

pub const GET_VERSION_PATH: &str = "/versionpb.API/GetVersion";
pub const PPS_DELETE_ALL_PATH: &str = "/pps.API/DeleteAll";
pub const PFS_DELETE_ALL_PATH: &str = "/pfs.API/DeleteAll";
pub const PPS_GARBAGE_COLLECT_PATH: &str = "/pps.API/GarbageCollect";

impl From<VersionMessage> for crate::version::Version {
    fn from(msg: VersionMessage) -> Self {
        crate::version::Version::new(msg.major, msg.minor, msg.micro).with_additional(msg.additional)
    }
}
