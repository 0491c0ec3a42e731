// demos/control_cycle.rs

use mc_control_math::{add_if_not_nan, constrain_xy, cross_sphere_line, thrust_to_attitude};
use nalgebra::Vector3;

fn main() {
    // Waypoint segment, 10 m north at 5 m altitude (NED)
    let prev = Vector3::new(0.0f32, 0.0, -5.0);
    let curr = Vector3::new(10.0f32, 0.0, -5.0);
    let acceptance_radius = 2.0;

    // Velocity limits
    let max_horizontal_speed = 3.0;
    let hover_thrust = 0.5;

    println!("   Position,             Target,    Found,  Roll,   Pitch,    Yaw, Thrust");
    let mut position = Vector3::new(-1.0f32, 1.0, -5.0);
    for _ in 0..=10 {
        let (found, target) = cross_sphere_line(&position, acceptance_radius, &prev, &curr);

        // feedback toward the lookahead point, feedforward along the segment
        let feedback = (target - position).xy();
        let feedforward = (curr - prev).xy().normalize();
        let velocity = constrain_xy(&feedback, &feedforward, max_horizontal_speed);

        // optional vertical contributions, NaN when unset
        let mut thrust_z = f32::NAN;
        add_if_not_nan(&mut thrust_z, -hover_thrust);
        add_if_not_nan(&mut thrust_z, f32::NAN);

        let thrust = Vector3::new(0.1 * velocity.x, 0.1 * velocity.y, thrust_z);
        let setpoint = thrust_to_attitude(&thrust, 0.0);

        println!(
            "{:5.2} {:5.2} {:5.2},  {:5.2} {:5.2} {:5.2},  {:5},  {:-6.3}, {:-6.3}, {:-6.3}, {:-6.3}",
            position.x,
            position.y,
            position.z,
            target.x,
            target.y,
            target.z,
            found,
            setpoint.roll,
            setpoint.pitch,
            setpoint.yaw,
            setpoint.collective_thrust()
        );

        // simulate response
        position += Vector3::new(velocity.x, velocity.y, 0.0);
    }
}
