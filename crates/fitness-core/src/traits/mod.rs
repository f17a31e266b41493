//! Repository and store traits (ports)

mod repositories;

pub use repositories::{
    CheckIn, ClientRepository, Enrollment, EnrollmentStore, EntitlementStore,
    MembershipRepository, RepoResult, VisitRepository,
};
