//! Car actor: claim a ride, load the rider at the head of the line, wait
//! for the start signal, bump around, unload, count the ride.

use std::thread;

use bc_core::{ActorRng, CarId};
use bc_pacing::Pacing;
use log::{debug, info};

use crate::ParkEvent;
use crate::shared::{CloseOnPanic, Shared};

/// Run car `id` until the quota is spent or the park closes.  Returns the
/// rides it completed.
pub(crate) fn run_car<P: Pacing>(id: CarId, park: &Shared, pacing: &P, mut rng: ActorRng) -> u64 {
    let _guard = CloseOnPanic(park);
    let seat = park.board.seat(id);
    let mut rides = 0u64;

    while park.countdown.claim() {
        debug!("{id} waiting for a passenger");
        let Some(rider) = park.line.serve(id, seat, &park.shutdown) else {
            break;
        };

        debug!("{id} loads {rider}");
        park.journal.record(ParkEvent::Loaded { car: id, rider });
        park.seat_gates.open(rider);

        if !park.start.consume(&park.shutdown) {
            // The rider left on shutdown before it could start the ride.
            seat.clear();
            break;
        }
        let delay = pacing.bump_delay(id, &mut rng);
        debug!("{id} bumping around with {rider} for {delay:?}");
        park.journal.record(ParkEvent::Bumping { car: id, delay });
        thread::sleep(delay);

        // Seat cleared before the rider is released, so it can never be
        // shown in two cars at once.
        debug!("{id} unloads {rider}");
        park.journal.record(ParkEvent::Unloaded { car: id, rider });
        seat.clear();
        park.end_gates.open(rider);

        let remaining = park.countdown.decrement();
        rides += 1;
        info!("{id} completed a ride, {remaining} remaining");
        park.journal.record(ParkEvent::RideCompleted { car: id, remaining });
        if remaining == 0 {
            break;
        }
    }

    park.close();
    debug!("{id} parked after {rides} rides");
    park.journal.record(ParkEvent::CarExited { car: id, rides });
    rides
}
