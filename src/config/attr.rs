use super::{Opts, READ_FORMAT};
use crate::event::Event;
use crate::ffi::{bindings as b, Attr};

pub(crate) fn from(event: &Event, opts: &Opts) -> Attr {
    let mut attr = Attr::default();
    attr.size = b::PERF_ATTR_SIZE_VER1 as _;

    attr.type_ = event.domain.as_type();
    attr.config = event.config;

    macro_rules! when {
        ($bool:expr, $then:tt) => {
            if $bool {
                attr.$then(1);
            }
        };
    }
    when!(opts.exclude.user, set_exclude_user);
    when!(opts.exclude.kernel, set_exclude_kernel);
    when!(opts.exclude.hv, set_exclude_hv);
    when!(opts.inherit, set_inherit);

    // Members follow the leader, which stays off until the group is started.
    attr.set_disabled(1);
    attr.read_format = READ_FORMAT;

    attr
}
