use super::perf_stats::PerfStats;
use super::LatticeCore;

pub(super) fn enable_perf_metrics(core: &mut LatticeCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn perf_enabled(core: &LatticeCore) -> bool {
    core.perf_enabled
}

pub(super) fn get_perf_stats(core: &LatticeCore) -> PerfStats {
    core.perf_stats.clone()
}
