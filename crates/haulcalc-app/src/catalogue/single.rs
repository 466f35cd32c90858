use haulcalc_types::MethodMode;

use super::{ids, FieldSpec, MethodSpec};
use crate::reports::{cycle, route};

const PENDULUM_EMPTY_RETURN_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payloadCapacity", "Грузоподъёмность автомобиля, т"),
    FieldSpec::ratio("loadFactor", "Коэффициент использования грузоподъёмности"),
    FieldSpec::number("shiftDuration", "Плановое время в наряде, ч"),
    FieldSpec::number("serviceTime", "Время на погрузку-выгрузку, ч"),
    FieldSpec::number("loadedDistance", "Расстояние перевозки груза, км"),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег, км"),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег, км"),
    FieldSpec::number("emptyDistance", "Холостой пробег, км"),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость, км/ч"),
];

const PENDULUM_PARTIAL_LOADED_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payloadCapacity", "Грузоподъёмность автомобиля (q), т"),
    FieldSpec::ratio("loadFactor", "Коэффициент использования грузоподъёмности (γ)"),
    FieldSpec::number("shiftDuration", "Плановое время в наряде (Tₙ), ч"),
    FieldSpec::number("serviceTime", "Время на погрузку-выгрузку (tₚᵥ), ч"),
    FieldSpec::number(
        "forwardDistance",
        "Расстояние перевозки груза в прямом направлении (l_g₁), км",
    ),
    FieldSpec::number(
        "returnDistance",
        "Расстояние перевозки груза в обратном направлении (l_g₂), км",
    ),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег (lₙ₁), км"),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег (lₙ₂), км"),
    FieldSpec::number("zeroRun3", "Третий нулевой пробег (lₙ₃), км"),
    FieldSpec::number("emptyDistance", "Холостой пробег (lₓ₂), км"),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость (Vₜ), км/ч"),
];

const PENDULUM_FULL_RETURN_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("distance", "Расстояние между пунктами (lₙ), км"),
    FieldSpec::number(
        "loadedSpeedForward",
        "Скорость в прямом гружёном направлении (Vₜ₁), км/ч",
    ),
    FieldSpec::number(
        "loadedSpeedReturn",
        "Скорость в обратном гружёном направлении (Vₜ₂), км/ч",
    ),
    FieldSpec::number("loadingTime", "Время погрузки (tₚ), ч"),
    FieldSpec::number("unloadingTimeForward", "Время разгрузки на прямом плече (tᵣ₁), ч"),
    FieldSpec::number("unloadingTimeReturn", "Время разгрузки на обратном плече (tᵣ₂), ч"),
    FieldSpec::number("prepTime", "Подготовительно-заключительное время (tₚ₋ₓ), ч"),
    FieldSpec::number("shiftDuration", "Продолжительность смены (Tₙ), ч"),
    FieldSpec::number("payloadForward", "Масса груза в прямом направлении (q₁), т"),
    FieldSpec::number("payloadReturn", "Масса груза в обратном направлении (q₂), т"),
];

const PENDULUM_UNEQUAL_LOAD_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payloadCapacity", "Грузоподъёмность автомобиля (q), т"),
    FieldSpec::ratio(
        "loadFactorForward",
        "Коэффициент использования грузоподъёмности в прямом направлении (γ₁)",
    ),
    FieldSpec::ratio(
        "loadFactorReturn",
        "Коэффициент использования грузоподъёмности в обратном направлении (γ₂)",
    ),
    FieldSpec::number("shiftDuration", "Плановое время в наряде (Tₙ), ч"),
    FieldSpec::number("serviceTime", "Время на погрузку-выгрузку (tₚᵥ), ч"),
    FieldSpec::number(
        "forwardDistance",
        "Расстояние перевозки груза в прямом направлении (l_g₁), км",
    ),
    FieldSpec::number(
        "returnDistance",
        "Расстояние перевозки груза в обратном направлении (l_g₂), км",
    ),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег (lₙ₁), км"),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег (lₙ₂), км"),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость (Vₜ), км/ч"),
];

const RING_ROUTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payloadCapacity", "Грузоподъёмность автомобиля (q), т"),
    FieldSpec::ratio(
        "staticLoadFactor",
        "Коэффициент статического использования грузоподъёмности (γ)",
    ),
    FieldSpec::number("shiftDuration", "Плановое время в наряде (Tₙ), ч"),
    FieldSpec::number("serviceTime", "Время на погрузку-выгрузку (tₚᵥ), ч"),
    FieldSpec::number("loadedDistance1", "Первый гружёный пробег (l_g₁), км"),
    FieldSpec::number("loadedDistance2", "Второй гружёный пробег (l_g₂), км"),
    FieldSpec::number("zeroRun1", "Первый нулевой пробег (lₙ₁), км"),
    FieldSpec::number("zeroRun2", "Второй нулевой пробег (lₙ₂), км"),
    FieldSpec::number("zeroRun3", "Третий нулевой пробег (lₙ₃), км"),
    FieldSpec::number("emptyRun1", "Первый холостой пробег (lₓ₁), км"),
    FieldSpec::number("emptyRun2", "Второй холостой пробег (lₓ₂), км"),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость (Vₜ), км/ч"),
];

const RING_SEGMENTS_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("segmentCount", "Число участков кольца (2-6)")
        .min(2.0)
        .max(6.0)
        .step(1.0)
        .default(4.0),
    FieldSpec::number("shiftDuration", "Продолжительность смены (Tₙ), ч"),
    FieldSpec::number("prepTime", "Подготовительно-заключительное время (tₚ₋ₓ), ч"),
    FieldSpec::number(
        "serviceTime",
        "Суммарное время погрузочно-разгрузочных операций за оборот, ч",
    ),
    FieldSpec::number("totalPayload", "Суммарная масса перевезённого груза за оборот, т"),
    FieldSpec::text(
        "segmentData",
        "Параметры участков (через точку с запятой): дистанция км, скорость км/ч, масса груза т",
    )
    .placeholder("Напр.: 12,40,5; 18,38,4; 15,42,3; 10,45,2"),
];

const SMALL_SHIPMENTS_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payloadCapacity", "Грузоподъёмность автомобиля (q), т").default(6.0),
    FieldSpec::ratio("loadFactor", "Коэффициент использования грузоподъёмности (γ)").default(1.0),
    FieldSpec::number("loadUnloadTime", "Время на погрузку-выгрузку (tₚᵥ), ч")
        .step(0.01)
        .default(0.4),
    FieldSpec::number("detourTime", "Время заезда (t_z), ч")
        .step(0.01)
        .default(0.15),
    FieldSpec::number("loadedDistance1", "Пробег с грузом на 1-м звене (l_g₁), км").default(11.0),
    FieldSpec::number("loadedDistance2", "Пробег с грузом на 2-м звене (l_g₂), км").default(8.0),
    FieldSpec::number("loadedDistance3", "Пробег с грузом на 3-м звене (l_g₃), км").default(7.0),
    FieldSpec::number("emptyDistance", "Холостой пробег (lₓ), км").default(3.0),
    FieldSpec::number("demandB", "Потребность в грузе п. B (q_B), т").default(1.0),
    FieldSpec::number("demandC", "Потребность в грузе п. C (q_C), т").default(3.0),
    FieldSpec::number("demandD", "Потребность в грузе п. D (q_D), т").default(2.0),
    FieldSpec::number("unloadingPoints", "Число пунктов разгрузки (P), шт")
        .min(1.0)
        .step(1.0)
        .default(3.0),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость (Vₜ), км/ч").default(29.0),
];

const MIXED_ROUTE_FIELDS: &[FieldSpec] = &[
    FieldSpec::number("payloadCapacity", "Грузоподъёмность автомобиля (q), т").default(10.0),
    FieldSpec::number("unloadLoadTime", "Время разгру-погрузки (tₚₚᵥ), ч")
        .step(0.01)
        .default(0.8),
    FieldSpec::number("collectionLoadTime", "Время сбор-погрузки (tₛₚᵥ), ч")
        .step(0.01)
        .default(0.8),
    FieldSpec::number("detourTime", "Время заезда (t_z), ч")
        .step(0.01)
        .default(0.2),
    FieldSpec::number("loadedDistance1", "Пробег с грузом l_g₁, км").default(7.0),
    FieldSpec::number("loadedDistance2", "Пробег с грузом l_g₂, км").default(11.0),
    FieldSpec::number("loadedDistance3", "Пробег с грузом l_g₃, км").default(8.0),
    FieldSpec::number("loadedDistance4", "Пробег с грузом l_g₄, км").default(10.0),
    FieldSpec::number("demandB", "Потребность в доставке в п. B (q_B_need), т").default(6.0),
    FieldSpec::number("pickupB", "Наличие к сбору в п. B (q_B_pick), т").default(4.0),
    FieldSpec::number("demandC", "Потребность в доставке в п. C (q_C_need), т").default(3.0),
    FieldSpec::number("pickupC", "Наличие к сбору в п. C (q_C_pick), т").default(3.0),
    FieldSpec::number("demandD", "Потребность в доставке в п. D (q_D_need), т").default(1.0),
    FieldSpec::number("pickupD", "Наличие к сбору в п. D (q_D_pick), т").default(3.0),
    FieldSpec::number("pointsCount", "Число пунктов на маршруте (K), шт")
        .min(1.0)
        .step(1.0)
        .default(4.0),
    FieldSpec::number("technicalSpeed", "Среднетехническая скорость (Vₜ), км/ч").default(24.0),
];

pub static SINGLE_METHODS: &[MethodSpec] = &[
    MethodSpec {
        id: ids::PENDULUM_EMPTY_RETURN,
        name: "1. Маятниковый маршрут с обратным не гружёным пробегом",
        description: "Методика рассчитывает показатели работы автомобиля на маятниковом маршруте с холостым обратным пробегом.",
        mode: MethodMode::Single,
        inputs: PENDULUM_EMPTY_RETURN_FIELDS,
        calculate: route::pendulum_empty_return,
    },
    MethodSpec {
        id: ids::PENDULUM_PARTIAL_LOADED,
        name: "2.1.1. Маятниковый маршрут с обратным гружёным пробегом не на всём расстоянии (γ₁ = γ₂)",
        description: "Методика 2.1.1 учитывает гружёные плечи и холостой участок на обратном пути при расчёте сменных показателей.",
        mode: MethodMode::Single,
        inputs: PENDULUM_PARTIAL_LOADED_FIELDS,
        calculate: route::pendulum_partial_loaded,
    },
    MethodSpec {
        id: ids::PENDULUM_FULL_RETURN,
        name: "2.1.2. Маятниковый маршрут с полностью гружёным обратным пробегом",
        description: "Грузовая работа выполняется в обоих направлениях. Используйте разные значения массы груза и скорости, если это необходимо.",
        mode: MethodMode::Single,
        inputs: PENDULUM_FULL_RETURN_FIELDS,
        calculate: cycle::pendulum_full_return,
    },
    MethodSpec {
        id: ids::PENDULUM_UNEQUAL_LOAD,
        name: "2.1.3. Маятниковый маршрут с обратным гружёным пробегом (γ₁ ≠ γ₂)",
        description: "Методика 2.1.3 рассчитывает маятниковый маршрут с различными коэффициентами использования грузоподъёмности по направлениям.",
        mode: MethodMode::Single,
        inputs: PENDULUM_UNEQUAL_LOAD_FIELDS,
        calculate: route::pendulum_unequal_load,
    },
    MethodSpec {
        id: ids::RING_ROUTE,
        name: "5. Кольцевой маршрут",
        description: "Методика описывает расчёт показателей работы автомобиля на кольцевом маршруте с двумя гружёными и двумя холостыми участками.",
        mode: MethodMode::Single,
        inputs: RING_ROUTE_FIELDS,
        calculate: route::ring_route_report,
    },
    MethodSpec {
        id: ids::RING_SEGMENTS,
        name: "2.2. Кольцевой маршрут (по участкам)",
        description: "Грузоперевозка по кольцевой схеме. Введите параметры каждого участка кольца и времена грузовых операций.",
        mode: MethodMode::Single,
        inputs: RING_SEGMENTS_FIELDS,
        calculate: cycle::ring_segments_report,
    },
    MethodSpec {
        id: ids::DELIVERY_SMALL_SHIPMENTS,
        name: "6. Развозочный маршрут (мелкие отправки)",
        description: "Методика расчёта показателей работы автомобиля на развозочном маршруте при перевозке мелких отправок с несколькими точками разгрузки.",
        mode: MethodMode::Single,
        inputs: SMALL_SHIPMENTS_FIELDS,
        calculate: route::delivery_small_shipments,
    },
    MethodSpec {
        id: ids::MIXED_DELIVERY_COLLECTION,
        name: "Методика расчёта показателей работы автомобиля на развозочно-сборном маршруте",
        description: "Расчёт для развозочно-сборного маршрута: длина маршрута, время оборота, выработка за оборот и тонно-километры с учётом доставок и сборов.",
        mode: MethodMode::Single,
        inputs: MIXED_ROUTE_FIELDS,
        calculate: route::mixed_delivery_collection,
    },
];
