//! Vapor diffusion through the membrane pores and across the air gap.
//!
//! Reference: K.M. Lisboa, D.B. Moraes, C.P. Naveira-Cotta, R.M. Cotta,
//! Analysis of the membrane effects on the energy efficiency of water
//! desalination in a direct contact membrane distillation (DCMD) system with
//! heat recovery, Appl. Thermal Eng. 182 (2021) 116063.

use std::f64::consts::PI;

use uom::si::{
    f64::{DiffusionCoefficient, Length, Pressure, Ratio, ThermodynamicTemperature, Velocity},
    linear_power_density::watt_per_meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::units::{PressureDiffusivity, VaporPermeability};

use super::{
    AirGap, Membrane,
    constants::{
        GAS_CONSTANT, WATER_MOLAR_MASS, atmospheric_pressure, gas_constant, water_molar_mass,
    },
};

/// Molecular diffusion of water vapor through air.
///
/// Returns the product of total pressure and diffusion coefficient,
/// `P·D = 4.46e-6 · (ε/τ) · T^2.334` in Pa·m²/s with `T` in kelvin.
/// Inside the membrane `ε` and `τ` describe the pore structure; across an
/// open air gap both are one.
#[must_use]
pub fn molecular_diffusion(
    porosity: Ratio,
    tortuosity: Ratio,
    temperature: ThermodynamicTemperature,
) -> PressureDiffusivity {
    let structure = porosity.get::<ratio>() / tortuosity.get::<ratio>();
    PressureDiffusivity::new::<watt_per_meter>(
        4.46e-6 * structure * temperature.get::<kelvin>().powf(2.334),
    )
}

/// Knudsen diffusion coefficient of water vapor in membrane pores.
///
/// `D_K = (d/3) · (ε/τ) · sqrt(8RT / πM)`, which governs transport when the
/// pore diameter approaches the mean free path of the vapor.
#[must_use]
pub fn knudsen_diffusion(
    porosity: Ratio,
    tortuosity: Ratio,
    pore_diameter: Length,
    temperature: ThermodynamicTemperature,
) -> DiffusionCoefficient {
    let structure = porosity.get::<ratio>() / tortuosity.get::<ratio>();
    pore_diameter * mean_molecular_speed(temperature) * (structure / 3.0)
}

/// Mean thermal speed of water vapor molecules, `sqrt(8RT / πM)`.
#[must_use]
pub fn mean_molecular_speed(temperature: ThermodynamicTemperature) -> Velocity {
    let rt_over_m = GAS_CONSTANT * temperature.get::<kelvin>() / WATER_MOLAR_MASS;
    Velocity::new::<meter_per_second>((8.0 * rt_over_m / PI).sqrt())
}

/// Combines molecular and Knudsen diffusion as resistances in parallel
/// (Bosanquet):
///
/// `D_eff = P·D_m · D_K / (P·D_m + P_total · D_K)`
#[must_use]
pub fn effective_diffusion(
    molecular: PressureDiffusivity,
    knudsen: DiffusionCoefficient,
    total_pressure: Pressure,
) -> DiffusionCoefficient {
    molecular * knudsen / (molecular + total_pressure * knudsen)
}

/// Total gas pressure in the pores and the gap.
///
/// `vacuum_pressure` is a gauge pressure added to atmospheric pressure; a
/// vacuum drawn on the gap is therefore negative.
#[must_use]
pub fn total_pressure(vacuum_pressure: Pressure) -> Pressure {
    atmospheric_pressure() + vacuum_pressure
}

/// Vapor permeability of the membrane, `M · D_eff / (R · T · δ)`.
#[must_use]
pub fn membrane_permeability(
    membrane: &Membrane,
    temperature: ThermodynamicTemperature,
    vacuum_pressure: Pressure,
) -> VaporPermeability {
    let molecular = molecular_diffusion(membrane.porosity, membrane.tortuosity, temperature);
    let knudsen = knudsen_diffusion(
        membrane.porosity,
        membrane.tortuosity,
        membrane.pore_diameter,
        temperature,
    );
    let effective = effective_diffusion(molecular, knudsen, total_pressure(vacuum_pressure));

    water_molar_mass() * effective / (gas_constant() * temperature * membrane.thickness)
}

/// Vapor permeability of the air gap, `M · P·D / (R · T · P_total · δ)`.
///
/// Only molecular diffusion acts across the gap, with unit porosity and
/// tortuosity.
#[must_use]
pub fn gap_permeability(
    gap: &AirGap,
    temperature: ThermodynamicTemperature,
    vacuum_pressure: Pressure,
) -> VaporPermeability {
    let open = Ratio::new::<ratio>(1.0);
    let molecular = molecular_diffusion(open, open, temperature);

    water_molar_mass() * molecular
        / (gas_constant() * temperature * total_pressure(vacuum_pressure) * gap.thickness)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second,
        f64::ThermalConductivity,
        length::{micrometer, millimeter},
        pressure::pascal,
        thermal_conductivity::watt_per_meter_kelvin,
        thermodynamic_temperature::degree_celsius,
    };

    fn ratio_of(value: f64) -> Ratio {
        Ratio::new::<ratio>(value)
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn membrane() -> Membrane {
        Membrane {
            porosity: ratio_of(0.8),
            tortuosity: ratio_of(1.5),
            thickness: Length::new::<micrometer>(100.0),
            pore_diameter: Length::new::<micrometer>(0.2),
            polymer_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.25),
        }
    }

    #[test]
    fn molecular_diffusion_follows_power_law_in_kelvin() {
        let pd = molecular_diffusion(ratio_of(0.8), ratio_of(1.5), celsius(60.0));
        let expected = 4.46e-6 * (0.8 / 1.5) * 333.15_f64.powf(2.334);
        assert_relative_eq!(pd.value, expected, max_relative = 1e-12);

        // Free air at 25 °C and 1 atm gives the textbook vapor diffusivity.
        let free = molecular_diffusion(ratio_of(1.0), ratio_of(1.0), celsius(25.0));
        let d = free.value / 101_325.0;
        assert!(d > 2.4e-5 && d < 2.8e-5, "D = {d}");
    }

    #[test]
    fn knudsen_diffusion_matches_kinetic_theory() {
        let d = knudsen_diffusion(
            ratio_of(0.8),
            ratio_of(1.5),
            Length::new::<micrometer>(0.2),
            celsius(60.0),
        );

        let speed = (8.0 * GAS_CONSTANT * 333.15 / (PI * WATER_MOLAR_MASS)).sqrt();
        let expected = 0.2e-6 / 3.0 * (0.8 / 1.5) * speed;
        assert_relative_eq!(
            d.get::<square_meter_per_second>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn knudsen_diffusion_trends() {
        let base = |porosity: f64, tortuosity: f64, diameter_um: f64, t_c: f64| {
            knudsen_diffusion(
                ratio_of(porosity),
                ratio_of(tortuosity),
                Length::new::<micrometer>(diameter_um),
                celsius(t_c),
            )
        };

        assert!(base(0.8, 1.5, 0.2, 40.0) < base(0.8, 1.5, 0.2, 80.0));
        assert!(base(0.8, 1.5, 0.1, 60.0) < base(0.8, 1.5, 0.45, 60.0));
        assert!(base(0.8, 2.0, 0.2, 60.0) < base(0.8, 1.2, 0.2, 60.0));

        // Scales with the square root of absolute temperature.
        let scaling = base(0.8, 1.5, 0.2, 80.0) / base(0.8, 1.5, 0.2, 20.0);
        assert_relative_eq!(
            scaling.get::<ratio>(),
            (353.15_f64 / 293.15).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn effective_diffusion_is_bounded_by_both_mechanisms() {
        let t = celsius(60.0);
        let molecular = molecular_diffusion(ratio_of(0.8), ratio_of(1.5), t);
        let knudsen =
            knudsen_diffusion(ratio_of(0.8), ratio_of(1.5), Length::new::<micrometer>(0.2), t);
        let p = total_pressure(Pressure::new::<pascal>(0.0));

        let effective = effective_diffusion(molecular, knudsen, p);
        let molecular_only = molecular.value / p.get::<pascal>();

        assert!(effective.value < knudsen.value);
        assert!(effective.value < molecular_only);
        assert_relative_eq!(
            1.0 / effective.value,
            1.0 / knudsen.value + 1.0 / molecular_only,
            max_relative = 1e-12
        );
    }

    #[test]
    fn vacuum_raises_permeability() {
        let t = celsius(60.0);
        let gap = AirGap {
            thickness: Length::new::<millimeter>(2.0),
        };
        let atmospheric = Pressure::new::<pascal>(0.0);
        let vacuum = Pressure::new::<pascal>(-50_000.0);

        assert!(
            membrane_permeability(&membrane(), t, atmospheric)
                < membrane_permeability(&membrane(), t, vacuum)
        );
        assert!(gap_permeability(&gap, t, atmospheric) < gap_permeability(&gap, t, vacuum));
    }

    #[test]
    fn permeabilities_scale_inversely_with_thickness() {
        let t = celsius(40.0);
        let p = Pressure::new::<pascal>(0.0);
        let thin = AirGap {
            thickness: Length::new::<millimeter>(1.0),
        };
        let thick = AirGap {
            thickness: Length::new::<millimeter>(4.0),
        };
        assert_relative_eq!(
            gap_permeability(&thin, t, p).value,
            4.0 * gap_permeability(&thick, t, p).value,
            max_relative = 1e-12
        );

        let doubled = Membrane {
            thickness: Length::new::<micrometer>(200.0),
            ..membrane()
        };
        assert_relative_eq!(
            membrane_permeability(&membrane(), t, p).value,
            2.0 * membrane_permeability(&doubled, t, p).value,
            max_relative = 1e-12
        );
    }
}
