//! Network validation logic.

use lh_core::LhError;

use crate::error::{NetworkError, NetworkResult};
use crate::network::{Line, Station};

/// Validate that IDs match their slots and that line/station memberships mirror each other.
pub(crate) fn validate_memberships(lines: &[Line], stations: &[Station]) -> NetworkResult<()> {
    for (i, line) in lines.iter().enumerate() {
        if line.id.slot() != i {
            return Err(LhError::Invariant {
                what: "line id does not match its slot",
            }
            .into());
        }
    }
    for (i, station) in stations.iter().enumerate() {
        if station.id.slot() != i {
            return Err(LhError::Invariant {
                what: "station id does not match its slot",
            }
            .into());
        }
    }

    // Every listed stop must be reflected on the station side
    for line in lines {
        for &sid in &line.stations {
            let station = stations.get(sid.slot()).ok_or(NetworkError::UnknownStation(sid))?;
            if !station.lines.contains(&line.id) {
                return Err(NetworkError::InconsistentMembership {
                    line: line.id,
                    station: sid,
                });
            }
        }
    }

    // And every serving line must actually list the station
    for station in stations {
        for (pos, &lid) in station.lines.iter().enumerate() {
            let line = lines.get(lid.slot()).ok_or(NetworkError::UnknownLine(lid))?;
            let listed = line.stations.contains(&station.id);
            let repeated = station.lines[..pos].contains(&lid);
            if !listed || repeated {
                return Err(NetworkError::InconsistentMembership {
                    line: lid,
                    station: station.id,
                });
            }
        }
    }

    Ok(())
}
